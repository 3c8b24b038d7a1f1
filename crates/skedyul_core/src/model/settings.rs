//! App settings singleton.

use super::Singleton;
use crate::store::StoreKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Custom,
}

/// Palette used when `theme == Theme::Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_string(),
            secondary: "#8b5cf6".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub enabled: bool,
    /// Reminder lead time in minutes.
    pub reminder_time: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_time: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub custom_theme_colors: ThemeColors,
    pub notifications: NotificationSettings,
}

impl Singleton for Settings {
    const KEY: StoreKey = StoreKey::Settings;
}
