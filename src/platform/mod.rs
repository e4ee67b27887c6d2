//! Platform helpers
//!
//! Browser environment checks that don't belong in the simulation. The
//! predicates are pure so they run under native tests; `main.rs` feeds them
//! the live user agent and viewport width.

/// Viewport width (CSS pixels) at or below which a device counts as mobile
pub const MOBILE_MAX_WIDTH: i32 = 768;

/// User-agent fragments that identify mobile browsers
const MOBILE_UA_FRAGMENTS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Whether a user-agent string looks like a mobile browser (case-insensitive)
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_UA_FRAGMENTS.iter().any(|frag| ua.contains(frag))
}

/// Whether to treat the device as mobile: a known mobile browser, or any
/// viewport too narrow for keyboard play.
pub fn is_mobile_device(user_agent: &str, viewport_width: i32) -> bool {
    is_mobile_user_agent(user_agent) || viewport_width <= MOBILE_MAX_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_user_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36"
        ));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    }

    #[test]
    fn test_desktop_user_agents() {
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) Gecko/20100101 Firefox/127.0"
        ));
    }

    #[test]
    fn test_narrow_viewport_counts_as_mobile() {
        let desktop_ua = "Mozilla/5.0 (X11; Linux x86_64)";
        assert!(is_mobile_device(desktop_ua, 768));
        assert!(is_mobile_device(desktop_ua, 360));
        assert!(!is_mobile_device(desktop_ua, 769));
    }
}
