//! Fixed page copy. Nothing here is mutated at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Cricket,
    Chip,
    Briefcase,
    Money,
    People,
    Calendar,
    Wifi,
    Book,
    Speech,
    GraduationCap,
    Building,
    Award,
    ThumbsUp,
    Play,
    Phone,
    Mail,
    Pin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cricket => "🏏",
            Icon::Chip => "💻",
            Icon::Briefcase => "💼",
            Icon::Money => "💰",
            Icon::People => "👥",
            Icon::Calendar => "📅",
            Icon::Wifi => "📶",
            Icon::Book => "📚",
            Icon::Speech => "💬",
            Icon::GraduationCap => "🎓",
            Icon::Building => "🏛️",
            Icon::Award => "🏅",
            Icon::ThumbsUp => "👍",
            Icon::Play => "▶️",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::Pin => "📍",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
}

impl NavItem {
    /// In-page anchor, e.g. `#achievements`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn anchor(&self) -> String {
        self.label.to_lowercase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisionItem {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AchievementItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

pub struct Candidate {
    pub name: &'static str,
    pub position: &'static str,
    pub roll_number: &'static str,
    pub programme: &'static str,
    pub semester: &'static str,
    pub campus: &'static str,
    pub election_date: &'static str,
    pub pitch: &'static str,
    pub badges: [(Icon, &'static str); 2],
}

pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub address: [&'static str; 3],
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "About" },
    NavItem { label: "Vision" },
    NavItem { label: "Video" },
    NavItem { label: "Achievements" },
    NavItem { label: "Testimonials" },
    NavItem { label: "Contact" },
];

pub const CANDIDATE: Candidate = Candidate {
    name: "Ishwor Regmi",
    position: "Candidate for FSU President",
    roll_number: "THA079BCE058",
    programme: "Bachelor in Civil Engineering",
    semester: "4th Semester",
    campus: "Thapathali Campus, Kathmandu",
    election_date: "Chaitra 5, 2081 BS",
    pitch: "As an independent candidate for the Free Student Union (FSU) election, I am committed to bringing positive change to our campus. With a strong academic background and a deep understanding of student needs, I aim to create an environment that fosters both academic excellence and personal growth.",
    badges: [
        (Icon::Award, "Independent Candidate"),
        (Icon::ThumbsUp, "Student-First Approach"),
    ],
};

pub const VISION_INTRO: &str = "We are committed to transforming our campus experience through these key initiatives that focus on academic excellence, infrastructure improvement, and student welfare.";

pub const VISION: [VisionItem; 9] = [
    VisionItem {
        icon: Icon::Cricket,
        title: "Cricket Net at Balkhu Ground",
        description: "Establishing a vibrant cricket practice facility where passion meets practice.",
    },
    VisionItem {
        icon: Icon::Chip,
        title: "Effective Microprocessor Lab",
        description: "Creating a modern lab environment fostering innovation and hands-on learning.",
    },
    VisionItem {
        icon: Icon::Briefcase,
        title: "Managed Internships",
        description: "Ensuring valuable experience with thoughtful attendance consideration.",
    },
    VisionItem {
        icon: Icon::Money,
        title: "Financial Transparency",
        description: "Annual financial report publication for complete transparency.",
    },
    VisionItem {
        icon: Icon::People,
        title: "Empowered Clubs",
        description: "Autonomous power to departmental and regional clubs.",
    },
    VisionItem {
        icon: Icon::Calendar,
        title: "Monthly Talk Sessions",
        description: "Regular CR assembly, meetings, and fund management.",
    },
    VisionItem {
        icon: Icon::Wifi,
        title: "Strong WiFi Coverage",
        description: "Ensuring reliable internet connectivity in every classroom.",
    },
    VisionItem {
        icon: Icon::Book,
        title: "Updated Library",
        description: "Sufficient new syllabus books in the library.",
    },
    VisionItem {
        icon: Icon::Speech,
        title: "Student Voice",
        description: "Regular forums for students to share their concerns and ideas.",
    },
];

pub const ACHIEVEMENTS: [AchievementItem; 3] = [
    AchievementItem {
        title: "Academic Excellence",
        description: "Maintained top academic performance while actively participating in student affairs",
        image: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?auto=format&fit=crop&q=80&w=600",
    },
    AchievementItem {
        title: "Community Service",
        description: "Led multiple community service initiatives benefiting local communities",
        image: "https://images.unsplash.com/photo-1531482615713-2afd69097998?auto=format&fit=crop&q=80&w=600",
    },
    AchievementItem {
        title: "Leadership",
        description: "Successfully organized various technical and cultural events on campus",
        image: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
    },
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Ayussma Adhikari",
        role: "Civil Engineering Student",
        text: "Ishwor has always been a voice for student rights and academic excellence. His vision for our campus is exactly what we need.",
    },
    Testimonial {
        name: "Aayush Shah",
        role: "Student Representative",
        text: "His commitment to transparency and student welfare makes him the perfect candidate for FSU President.",
    },
];

pub const CONTACT: ContactInfo = ContactInfo {
    phone: "+977 986-6140598",
    email: "ishwor.regmi@gmail.com",
    location: "Thapathali Campus, Kathmandu",
    address: ["Institute of Engineering", "Thapathali Campus", "Kathmandu, Nepal"],
};

pub const FOOTER_TAGLINE: &str = "Together, let's build a better future for our campus community.";
pub const COPYRIGHT: &str = "© 2024 Ishwor Regmi Campaign. All rights reserved.";
