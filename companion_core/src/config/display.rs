//! Live dashboard display settings

use serde::{Deserialize, Serialize};

/// Settings that shape the combat view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Maximum player rows kept after ranking
    #[serde(default = "default_max_display_count")]
    pub max_display_count: usize,
    /// Keep actors without a class entry (mobs, summons)
    #[serde(default = "default_show_unclassified")]
    pub show_unclassified: bool,
    /// Follow the last damaged target instead of the selected one
    #[serde(default)]
    pub auto_target: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            max_display_count: default_max_display_count(),
            show_unclassified: default_show_unclassified(),
            auto_target: false,
        }
    }
}

fn default_max_display_count() -> usize {
    8
}
fn default_show_unclassified() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_toml;

    #[test]
    fn test_default_settings() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.max_display_count, 8);
        assert!(settings.show_unclassified);
        assert!(!settings.auto_target);
    }

    #[test]
    fn test_parse_settings() {
        let toml = r#"
max_display_count = 12
auto_target = true
"#;
        let settings: DisplaySettings = parse_toml(toml).unwrap();
        assert_eq!(settings.max_display_count, 12);
        assert!(settings.show_unclassified);
        assert!(settings.auto_target);
    }

    #[test]
    fn test_settings_from_json() {
        let settings: DisplaySettings =
            serde_json::from_str(r#"{"show_unclassified": false}"#).unwrap();
        assert!(!settings.show_unclassified);
        assert_eq!(settings.max_display_count, 8);
    }
}
