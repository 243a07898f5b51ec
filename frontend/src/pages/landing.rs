use log::info;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::progress_bar::ProgressBar;
use crate::components::reveal::Reveal;
use crate::config::{
    CAMPAIGN_VIDEO_URL, CAMPAIGN_VIDEO_WATCH_URL, PORTRAIT_PATH, REVEAL_DURATION_SECS,
    REVEAL_OFFSET_PX,
};
use crate::content::{
    Icon, ACHIEVEMENTS, CANDIDATE, CONTACT, TESTIMONIALS, VISION, VISION_INTRO,
};

/// The whole campaign page. Owns the mobile menu flag so that both the
/// navigation bar and the footer quick links can close it.
#[function_component(Landing)]
pub fn landing() -> Html {
    let menu_open = use_state(|| false);

    use_effect_with_deps(
        |_| {
            info!("Rendering campaign page");
            || ()
        },
        (),
    );

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };
    let on_close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <div class="landing-page">
            <style>{page_styles()}</style>
            <ProgressBar />
            <Nav menu_open={*menu_open} on_toggle={on_toggle} on_close={on_close.clone()} />
            <Hero />
            <About />
            <VisionSection />
            <VideoSection />
            <AchievementsSection />
            <TestimonialsSection />
            <ContactSection />
            <Footer on_link={on_close} />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-inner">
                <div class="hero-text slide-in-left">
                    <h1>{CANDIDATE.name}</h1>
                    <p class="hero-position">{CANDIDATE.position}</p>
                    <p class="hero-meta">{format!("{} • {}", CANDIDATE.roll_number, CANDIDATE.programme)}</p>
                    <p class="hero-meta">{format!("{} • {}", CANDIDATE.semester, CANDIDATE.campus)}</p>
                    <a href="#contact" class="hero-cta">{"Support Our Campaign"}</a>
                </div>
                <div class="hero-image slide-in-right">
                    <img src={PORTRAIT_PATH} alt="Campus" />
                </div>
            </div>
        </header>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="card about-card">
                        <div class="section-heading">
                            <span class="icon">{Icon::Building.glyph()}</span>
                            <h2>{"About the Candidate"}</h2>
                        </div>
                        <div class="two-columns">
                            <div>
                                <p class="lead">{CANDIDATE.pitch}</p>
                                <p>{format!("Election Date: {}", CANDIDATE.election_date)}</p>
                                <div class="badges">
                                    { for CANDIDATE.badges.iter().map(|(icon, label)| html! {
                                        <span class="badge hover-grow">{icon.glyph()}{" "}{*label}</span>
                                    }) }
                                </div>
                            </div>
                            <div class="hover-grow">
                                <img class="rounded" src={PORTRAIT_PATH} alt="Campus Life" />
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(VisionSection)]
fn vision_section() -> Html {
    html! {
        <section id="vision" class="section section-muted">
            <div class="section-inner">
                <Reveal>
                    <h2 class="centered">{"Our Vision"}</h2>
                    <p class="centered intro">{VISION_INTRO}</p>
                </Reveal>
                <div class="grid grid-3">
                    { for VISION.iter().map(|item| html! {
                        <Reveal key={item.title}>
                            <div class="card vision-card hover-grow">
                                <div class="vision-title">
                                    <span class="icon">{item.icon.glyph()}</span>
                                    <h3>{item.title}</h3>
                                </div>
                                <p>{item.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(VideoSection)]
fn video_section() -> Html {
    html! {
        <section id="video" class="section section-white">
            <div class="section-inner">
                <Reveal>
                    <h2 class="centered">{"Campaign Video"}</h2>
                    <div class="video-frame">
                        <iframe
                            src={CAMPAIGN_VIDEO_URL}
                            title="Campaign Video"
                            frameborder="0"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                    <div class="centered">
                        <a
                            class="pill-button"
                            href={CAMPAIGN_VIDEO_WATCH_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {Icon::Play.glyph()}{" Watch Full Video"}
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(AchievementsSection)]
fn achievements_section() -> Html {
    html! {
        <section id="achievements" class="section">
            <div class="section-inner">
                <Reveal>
                    <h2 class="centered">{"Past Achievements"}</h2>
                    <div class="grid grid-3">
                        { for ACHIEVEMENTS.iter().map(|item| html! {
                            <div key={item.title} class="card achievement-card hover-lift">
                                <img src={item.image} alt={item.title} loading="lazy" />
                                <div class="achievement-body">
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    html! {
        <section id="testimonials" class="section section-blue">
            <div class="section-inner">
                <Reveal>
                    <h2 class="centered">{"Student Testimonials"}</h2>
                    <div class="grid grid-2">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div key={t.name} class="card testimonial-card hover-grow-slight">
                                <p class="quote">{format!("\"{}\"", t.text)}</p>
                                <p class="testimonial-name">{t.name}</p>
                                <p class="testimonial-role">{t.role}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let rows = [
        (Icon::Phone, CONTACT.phone),
        (Icon::Mail, CONTACT.email),
        (Icon::Pin, CONTACT.location),
    ];

    html! {
        <section id="contact" class="section">
            <div class="section-inner">
                <Reveal>
                    <h2 class="centered">{"Get in Touch"}</h2>
                    <div class="two-columns">
                        <div>
                            <h3>{"Contact Information"}</h3>
                            <div class="contact-rows">
                                { for rows.iter().map(|(icon, text)| html! {
                                    <div class="contact-row">
                                        <span class="icon">{icon.glyph()}</span>
                                        <p>{*text}</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                        <ContactForm />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn page_styles() -> String {
    format!(
        r#"
        .reveal {{
            opacity: 0;
            transform: translateY({offset}px);
            transition: opacity {duration}s ease-out, transform {duration}s ease-out;
        }}
        .reveal.revealed {{
            opacity: 1;
            transform: none;
        }}
        {rest}
        "#,
        offset = REVEAL_OFFSET_PX,
        duration = REVEAL_DURATION_SECS,
        rest = STATIC_STYLES,
    )
}

const STATIC_STYLES: &str = r#"
.landing-page {
    min-height: 100vh;
    background: #f9fafb;
    color: #1f2937;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
@keyframes fadeDown {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: none; }
}
@keyframes fadeUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: none; }
}
@keyframes slideLeft {
    from { opacity: 0; transform: translateX(-50px); }
    to { opacity: 1; transform: none; }
}
@keyframes slideRight {
    from { opacity: 0; transform: translateX(50px); }
    to { opacity: 1; transform: none; }
}

.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    background: #1d4ed8;
    transform-origin: left;
    z-index: 50;
}

.top-nav {
    position: fixed;
    width: 100%;
    z-index: 40;
    background: transparent;
    transition: all 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem;
    height: 4rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
    text-decoration: none;
    animation: slideLeft 0.5s ease-out both;
}
.top-nav.scrolled .nav-logo { color: #1d4ed8; }
.nav-links { display: flex; gap: 2rem; }
.nav-link {
    color: #fff;
    text-decoration: none;
    transition: color 0.2s;
    animation: fadeDown 0.5s ease-out both;
}
.nav-link:hover { color: #bfdbfe; }
.top-nav.scrolled .nav-link { color: #4b5563; }
.top-nav.scrolled .nav-link:hover { color: #1d4ed8; }
.burger-menu {
    display: none;
    background: none;
    border: none;
    font-size: 1.5rem;
    color: #fff;
    cursor: pointer;
}
.top-nav.scrolled .burger-menu { color: #4b5563; }
.mobile-menu {
    padding: 0 1rem 1rem;
    background: rgba(255, 255, 255, 0.95);
    animation: fadeDown 0.3s ease-out both;
}
.mobile-link {
    display: block;
    padding: 0.5rem 0;
    color: #4b5563;
    text-decoration: none;
}
.mobile-link:hover { color: #1d4ed8; }

.hero {
    padding-top: 4rem;
    min-height: 100vh;
    display: flex;
    align-items: center;
    color: #fff;
    background: linear-gradient(to right, #1d4ed8, #1e3a8a);
}
.hero-inner {
    max-width: 1152px;
    margin: 0 auto;
    padding: 4rem 1rem;
    display: flex;
    align-items: center;
    gap: 2rem;
}
.hero-text, .hero-image { flex: 1; }
.hero h1 { font-size: 3.75rem; margin: 0 0 1rem; }
.hero-position { font-size: 1.5rem; margin-bottom: 0.5rem; }
.hero-meta { font-size: 1.125rem; opacity: 0.9; margin: 0.25rem 0; }
.hero-cta {
    display: inline-block;
    margin-top: 1.5rem;
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    background: #fff;
    color: #1d4ed8;
    font-weight: 600;
    text-decoration: none;
    transition: transform 0.2s, background 0.2s;
}
.hero-cta:hover { transform: scale(1.05); background: #eff6ff; }
.hero-cta:active { transform: scale(0.95); }
.hero-image img {
    width: 100%;
    border-radius: 0.5rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    transition: transform 0.3s;
}
.hero-image img:hover { transform: scale(1.05); }
.slide-in-left { animation: slideLeft 0.8s ease-out both; }
.slide-in-right { animation: slideRight 0.8s ease-out both; }

.section { padding: 4rem 0; }
.section-muted { background: #f3f4f6; }
.section-white { background: #fff; }
.section-blue { background: #eff6ff; }
.section-inner { max-width: 1152px; margin: 0 auto; padding: 0 1rem; }
.section h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 3rem; }
.section-heading { display: flex; align-items: center; gap: 0.75rem; }
.section-heading h2 { margin-bottom: 1.5rem; }
.centered { text-align: center; }
.intro { color: #4b5563; max-width: 42rem; margin: -2rem auto 3rem; }
.icon { font-size: 1.5rem; }
.card {
    background: #fff;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    padding: 1.5rem;
}
.about-card { padding: 2rem; }
.lead { font-size: 1.125rem; color: #374151; }
.rounded { width: 100%; border-radius: 0.5rem; }
.two-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.grid { display: grid; gap: 2rem; }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-2 { grid-template-columns: repeat(2, 1fr); }
.badges { display: flex; gap: 1rem; flex-wrap: wrap; }
.badge {
    display: inline-flex;
    align-items: center;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: #dbeafe;
    color: #1d4ed8;
}
.badge + .badge { background: #dcfce7; color: #15803d; }
.hover-grow { transition: transform 0.3s, box-shadow 0.3s; }
.hover-grow:hover { transform: scale(1.05); box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1); }
.hover-grow-slight { transition: transform 0.3s; }
.hover-grow-slight:hover { transform: scale(1.02); }
.hover-lift { transition: transform 0.3s; }
.hover-lift:hover { transform: translateY(-10px); }
.vision-title { display: flex; align-items: center; gap: 0.75rem; color: #1d4ed8; }
.vision-title h3 { font-size: 1.25rem; margin: 0; }
.vision-card p { color: #4b5563; }
.video-frame {
    position: relative;
    aspect-ratio: 16 / 9;
    border-radius: 0.75rem;
    overflow: hidden;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.video-frame iframe { position: absolute; inset: 0; width: 100%; height: 100%; }
.pill-button {
    display: inline-block;
    margin-top: 2rem;
    padding: 0.75rem 1.5rem;
    border-radius: 9999px;
    background: #1d4ed8;
    color: #fff;
    text-decoration: none;
    transition: transform 0.2s, background 0.2s;
}
.pill-button:hover { background: #1e40af; transform: scale(1.05); }
.achievement-card { padding: 0; overflow: hidden; }
.achievement-card img { width: 100%; height: 12rem; object-fit: cover; }
.achievement-body { padding: 1.5rem; }
.achievement-body p, .quote { color: #4b5563; }
.testimonial-name { font-weight: 600; color: #1f2937; margin: 0; }
.testimonial-role { color: #6b7280; font-size: 0.875rem; margin: 0; }
.contact-rows { display: flex; flex-direction: column; gap: 1rem; }
.contact-row { display: flex; align-items: center; gap: 0.75rem; transition: transform 0.2s; }
.contact-row:hover { transform: translateX(10px); }
.contact-row p { color: #4b5563; margin: 0; }
.contact-form { display: flex; flex-direction: column; gap: 1rem; }
.form-field { animation: fadeUp 0.5s ease-out both; }
.form-field label { display: block; color: #374151; margin-bottom: 0.5rem; }
.form-field input, .form-field textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
}
.form-field input:focus, .form-field textarea:focus {
    outline: none;
    border-color: transparent;
    box-shadow: 0 0 0 2px #3b82f6;
}
.submit-button {
    width: 100%;
    padding: 0.75rem;
    border: none;
    border-radius: 0.5rem;
    background: #1d4ed8;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.2s, background 0.2s;
}
.submit-button:hover { background: #1e40af; transform: scale(1.02); }
.submit-button:active { transform: scale(0.98); }

.site-footer { background: #1e3a8a; color: #fff; padding: 3rem 1rem; }
.footer-grid {
    max-width: 1152px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.footer-column { animation: fadeUp 0.5s ease-out both; }
.footer-column p, .quick-links a { color: #bfdbfe; }
.footer-brand { display: flex; align-items: center; gap: 0.5rem; }
.quick-links { list-style: none; padding: 0; }
.quick-links li { margin-bottom: 0.5rem; }
.quick-links a { text-decoration: none; transition: color 0.2s; }
.quick-links a:hover { color: #fff; }
.footer-bottom {
    max-width: 1152px;
    margin: 2rem auto 0;
    padding-top: 2rem;
    border-top: 1px solid #1e40af;
    text-align: center;
    color: #bfdbfe;
}

@media (max-width: 768px) {
    .nav-links { display: none; }
    .burger-menu { display: block; }
    .hero-inner, .two-columns { display: flex; flex-direction: column; text-align: center; }
    .hero h1 { font-size: 2.25rem; }
    .grid-3, .grid-2, .footer-grid { grid-template-columns: 1fr; }
}
@media (min-width: 769px) {
    .mobile-menu { display: none; }
}
@media (min-width: 769px) and (max-width: 1024px) {
    .grid-3 { grid-template-columns: repeat(2, 1fr); }
}
"#;
