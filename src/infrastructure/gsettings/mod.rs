pub mod command;
pub mod mode_observer;
pub mod wallpaper_store;

pub use mode_observer::GSettingsModeObserver;
pub use wallpaper_store::GSettingsWallpaperStore;

/// A single gsettings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingKey {
    pub schema: &'static str,
    pub key: &'static str,
}

pub const COLOR_SCHEME: SettingKey = SettingKey {
    schema: "org.freedesktop",
    key: "prefers-color-scheme",
};

pub const PICTURE_URI: SettingKey = SettingKey {
    schema: "org.gnome.desktop.background",
    key: "picture-uri",
};
