use serde::{Deserialize, Serialize};

/// Stores user-configurable list preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Zone used to split history into calendar days: `UTC`, `+02:00` or an IANA name.
    #[serde(default = "Config::default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub sections: SectionDefaults,
    #[serde(default)]
    pub empty_state: EmptyStateText,
    /// `first_seen` or `last_seen`.
    #[serde(default = "Config::default_duplicate_policy_value")]
    pub duplicate_policy: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: Self::default_timezone(),
            sections: SectionDefaults::default(),
            empty_state: EmptyStateText::default(),
            duplicate_policy: Self::default_duplicate_policy_value(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_timezone() -> String {
        "UTC".into()
    }

    pub fn default_duplicate_policy_value() -> String {
        "first_seen".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }
}

/// Expand flags applied when a list is first shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDefaults {
    #[serde(default)]
    pub upcoming_expanded: bool,
    #[serde(default = "SectionDefaults::default_overdue_expanded")]
    pub overdue_expanded: bool,
}

impl SectionDefaults {
    fn default_overdue_expanded() -> bool {
        true
    }
}

impl Default for SectionDefaults {
    fn default() -> Self {
        Self {
            upcoming_expanded: false,
            overdue_expanded: Self::default_overdue_expanded(),
        }
    }
}

/// Replacement copy for the empty list; unset fields keep the built-in text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyStateText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
