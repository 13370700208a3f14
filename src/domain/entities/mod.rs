pub mod appearance_mode;
pub mod config;
pub mod wallpaper_uri;

pub use appearance_mode::AppearanceMode;
pub use config::{ModeWallpaper, WallpaperConfig};
pub use wallpaper_uri::WallpaperUri;
