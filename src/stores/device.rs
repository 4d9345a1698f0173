//! User-agent classification for the first server render.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    /// Viewport width assumed before the client measures the real one.
    pub fn default_width(self) -> u32 {
        match self {
            DeviceType::Mobile => 375,
            DeviceType::Tablet => 768,
            DeviceType::Desktop => 1200,
        }
    }
}

/// Device information derived from the `User-Agent` header.
///
/// `is_mobile` is true for any handheld, tablets included; `device_type`
/// distinguishes the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub user_agent: String,
    pub device_type: DeviceType,
    pub default_width: u32,
}

const TABLET_TOKENS: &[&str] = &["ipad", "tablet", "kindle", "silk/", "playbook", "nexus 7", "nexus 10"];
const PHONE_TOKENS: &[&str] = &[
    "iphone",
    "ipod",
    "windows phone",
    "blackberry",
    "bb10",
    "opera mini",
    "iemobile",
    "mobi",
];

pub fn detect_device(user_agent: &str) -> DeviceInfo {
    let ua = user_agent.to_ascii_lowercase();
    let android = ua.contains("android");

    // Android tablets omit the "Mobile" token.
    let is_tablet = TABLET_TOKENS.iter().any(|t| ua.contains(t))
        || (android && !ua.contains("mobile"));
    let is_phone = !is_tablet && (PHONE_TOKENS.iter().any(|t| ua.contains(t)) || android);

    let device_type = if is_tablet {
        DeviceType::Tablet
    } else if is_phone {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    };

    DeviceInfo {
        is_mobile: is_phone || is_tablet,
        is_tablet,
        is_desktop: device_type == DeviceType::Desktop,
        user_agent: user_agent.to_string(),
        device_type,
        default_width: device_type.default_width(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iphone() {
        let info = detect_device(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
        );
        assert_eq!(info.device_type, DeviceType::Mobile);
        assert!(info.is_mobile);
        assert!(!info.is_tablet);
        assert_eq!(info.default_width, 375);
    }

    #[test]
    fn test_android_tablet_vs_phone() {
        let tablet = detect_device("Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 Safari/537.36");
        assert_eq!(tablet.device_type, DeviceType::Tablet);
        assert!(tablet.is_mobile);

        let phone = detect_device(
            "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Mobile Safari/537.36",
        );
        assert_eq!(phone.device_type, DeviceType::Mobile);
    }

    #[test]
    fn test_ipad() {
        let info = detect_device("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) Mobile/15E148");
        assert_eq!(info.device_type, DeviceType::Tablet);
        assert_eq!(info.default_width, 768);
    }

    #[test]
    fn test_desktop_and_empty() {
        let info = detect_device("Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0");
        assert!(info.is_desktop);
        assert!(!info.is_mobile);
        assert_eq!(info.default_width, 1200);

        assert!(detect_device("").is_desktop);
    }
}
