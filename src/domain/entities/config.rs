use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppearanceMode, WallpaperUri};

/// Desired wallpaper for one appearance mode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModeWallpaper {
    pub picture_uri: WallpaperUri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
}

impl ModeWallpaper {
    pub fn new(picture_uri: WallpaperUri) -> Self {
        Self {
            picture_uri,
            captured_at: None,
        }
    }

    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = Some(captured_at);
        self
    }
}

/// Persisted mapping of appearance mode to desired wallpaper. Either entry
/// may be missing until the user captures a wallpaper for that mode.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WallpaperConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<ModeWallpaper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ModeWallpaper>,
}

impl WallpaperConfig {
    pub fn entry(&self, mode: AppearanceMode) -> Option<&ModeWallpaper> {
        match mode {
            AppearanceMode::Light => self.light.as_ref(),
            AppearanceMode::Dark => self.dark.as_ref(),
        }
    }

    pub fn wallpaper_for(&self, mode: AppearanceMode) -> Option<&WallpaperUri> {
        self.entry(mode).map(|entry| &entry.picture_uri)
    }

    pub fn set_wallpaper_for(&mut self, mode: AppearanceMode, wallpaper: ModeWallpaper) {
        match mode {
            AppearanceMode::Light => self.light = Some(wallpaper),
            AppearanceMode::Dark => self.dark = Some(wallpaper),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_none() && self.dark.is_none()
    }
}
