use log::Level;

/// Vertical offset in pixels past which the navigation bar switches to its
/// scrolled style. Offsets equal to the threshold still count as "at top".
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of an element that must be inside the viewport before its
/// entrance transition plays.
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_DURATION_SECS: f64 = 0.6;
pub const REVEAL_OFFSET_PX: f64 = 50.0;

pub const CAMPAIGN_VIDEO_URL: &str = "https://www.youtube.com/embed/79GJ3XQwe_U?si=RP_ZUMSBLQE5_jlA";
pub const CAMPAIGN_VIDEO_WATCH_URL: &str = "https://www.youtube.com/watch?v=79GJ3XQwe_U";

pub const PORTRAIT_PATH: &str = "/assets/portrait.svg";

pub const ACKNOWLEDGMENT: &str = "Thank you for your message! We will get back to you soon.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // chatty while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_embed_points_at_embed_endpoint() {
        assert!(CAMPAIGN_VIDEO_URL.starts_with("https://"));
        assert!(CAMPAIGN_VIDEO_URL.contains("/embed/"));
    }

    #[test]
    fn reveal_threshold_is_a_fraction() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    }
}
