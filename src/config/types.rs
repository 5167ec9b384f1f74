use serde::{Deserialize, Serialize};

use crate::ui::Page;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Item store endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Resource URL for list/create/update/delete.
    #[serde(default = "default_api_url")]
    pub url: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How many ticks a notification stays on screen (default: 16).
    #[serde(default = "default_notification_ticks")]
    pub notification_ticks: u32,
    /// Page shown on startup (default: home).
    #[serde(default)]
    pub start_page: Page,
}

fn default_api_url() -> String {
    "https://functions.poehali.dev/a52c14f7-9792-4ea5-8c1b-4ef85aa6ca4d".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_ticks() -> u32 {
    16
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notification_ticks: default_notification_ticks(),
            start_page: Page::default(),
        }
    }
}
