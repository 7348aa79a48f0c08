//! Application settings with persistence.

use serde::{Deserialize, Serialize};

use crate::models::{ROLE_MAIN, ROLE_TARGET};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppSettings {
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub migration_grid: MigrationGridSettings,
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppearanceSettings {
    #[serde(default = "default_true")]
    pub show_request_log: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self { show_request_log: true }
    }
}

/// Which logical keys get a column in the extraction panel, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MigrationGridSettings {
    #[serde(default = "default_grid_keys")]
    pub keys: Vec<String>,
}

impl Default for MigrationGridSettings {
    fn default() -> Self {
        Self { keys: default_grid_keys() }
    }
}

fn default_grid_keys() -> Vec<String> {
    vec![ROLE_MAIN.to_string(), ROLE_TARGET.to_string()]
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.appearance.show_request_log);
        assert_eq!(settings.migration_grid.keys, vec!["Main", "Target"]);
    }

    #[test]
    fn empty_grid_is_preserved() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "migration_grid": { "keys": [] } }"#).expect("valid json");
        assert!(settings.migration_grid.keys.is_empty());
        assert!(settings.appearance.show_request_log);
    }
}
