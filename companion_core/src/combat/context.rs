//! SelectionContext - What the viewer has selected

use crate::config::DisplaySettings;
use serde::{Deserialize, Serialize};

/// Viewer selection passed to every reduction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionContext {
    #[serde(default)]
    pub current_target: Option<i64>,
    #[serde(default)]
    pub current_player: Option<i64>,
    #[serde(default)]
    pub settings: DisplaySettings,
}

impl SelectionContext {
    pub fn new(settings: DisplaySettings) -> Self {
        SelectionContext {
            settings,
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: Option<i64>) -> Self {
        self.current_target = target;
        self
    }

    pub fn with_player(mut self, player: Option<i64>) -> Self {
        self.current_player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = SelectionContext::default().with_target(Some(5)).with_player(Some(7));
        assert_eq!(ctx.current_target, Some(5));
        assert_eq!(ctx.current_player, Some(7));
        assert_eq!(ctx.settings, DisplaySettings::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let ctx: SelectionContext =
            serde_json::from_str(r#"{ "current_target": 5, "settings": { "auto_target": true } }"#).unwrap();
        assert_eq!(ctx.current_target, Some(5));
        assert_eq!(ctx.current_player, None);
        assert!(ctx.settings.auto_target);
        assert_eq!(ctx.settings.max_display_count, 8);
    }
}
