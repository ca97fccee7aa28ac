use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::task::Category;

/// Configuration from config.toml (every section optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub reminders: ReminderConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot name (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Minutes between periodic due-today checks
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
    /// Send desktop notifications (toasts are always shown)
    #[serde(default = "default_true")]
    pub desktop: bool,
}

impl ReminderConfig {
    /// Time between periodic checks; at least one minute, saturating for
    /// absurdly large settings
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.max(1).saturating_mul(60))
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            interval_minutes: default_interval_minutes(),
            desktop: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Category preselected in the add-task form
    #[serde(default = "default_category")]
    pub default_category: Category,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            default_category: default_category(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_minutes() -> u64 {
    60
}

fn default_category() -> Category {
    Category::School
}
