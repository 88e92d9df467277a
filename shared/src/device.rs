//! User-agent based device detection for the AR launch button.

use tracing::debug;

/// Capabilities relevant to AR launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_ios: bool,
    pub is_android: bool,
}

impl DeviceProfile {
    /// Classify a browser from its user agent and touch point count.
    ///
    /// iPadOS reports a desktop Safari user agent, so a "Macintosh" agent with
    /// more than one touch point counts as iOS.
    pub fn detect(user_agent: &str, max_touch_points: u32) -> Self {
        let lower = user_agent.to_ascii_lowercase();

        let is_android = lower.contains("android");
        let is_ios = ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|device| user_agent.contains(device))
            || (lower.contains("macintosh") && max_touch_points > 1);
        let is_mobile = is_android || is_ios || max_touch_points > 0;

        let profile = Self {
            is_mobile,
            is_ios,
            is_android,
        };
        debug!(?profile, max_touch_points, "detected device");
        profile
    }

    /// Whether the "View in AR" button is shown at all
    pub fn show_ar_button(&self) -> bool {
        self.is_mobile
    }
}
