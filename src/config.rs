use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// localStorage key holding a JSON override of [`AppConfig`].
pub const CONFIG_STORAGE_KEY: &str = "task-board.config";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `info` or `task_board_ui=debug`.
    pub log_filter: String,
    pub toast_duration_ms: u32,
    pub max_toasts: usize,
    /// Pointer travel (px) before a press turns into a drag.
    pub drag_activation_distance: f64,
    /// Offset applied per arrow key while dragging with the keyboard.
    pub keyboard_step: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            toast_duration_ms: 5000,
            max_toasts: 4,
            drag_activation_distance: 5.0,
            keyboard_step: 25.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_toasts == 0 {
            return Err(ConfigError::InvalidConfig("max_toasts must be at least 1".into()));
        }
        if self.drag_activation_distance < 0.0 || self.keyboard_step <= 0.0 {
            return Err(ConfigError::InvalidConfig(
                "drag distances must be positive".into(),
            ));
        }
        Ok(self)
    }

    /// Reads the override from localStorage, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("{e}; using default configuration").into());
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"toast_duration_ms": 1500}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.max_toasts, 4);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_toast_cap_is_rejected() {
        assert!(AppConfig::from_json(r#"{"max_toasts": 0}"#).is_err());
        assert!(AppConfig::from_json(r#"{"keyboard_step": 0}"#).is_err());
    }
}
