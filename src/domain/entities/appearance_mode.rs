use serde::{Deserialize, Serialize};
use std::fmt;

use super::wallpaper_uri::strip_quotes;

/// The two appearance modes a wallpaper can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Light,
    Dark,
}

impl AppearanceMode {
    /// Maps a raw settings value to a mode. Only an exact `dark` selects
    /// [`AppearanceMode::Dark`]; gsettings quoting is ignored.
    pub fn from_setting_value(value: &str) -> Self {
        if strip_quotes(value) == "dark" {
            AppearanceMode::Dark
        } else {
            AppearanceMode::Light
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppearanceMode::Light => write!(f, "Light"),
            AppearanceMode::Dark => write!(f, "Dark"),
        }
    }
}
