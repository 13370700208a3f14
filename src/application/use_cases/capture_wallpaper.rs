use crate::domain::{
    entities::{AppearanceMode, ModeWallpaper, WallpaperConfig, WallpaperUri},
    errors::WallchResult,
    repositories::{ModePreferenceObserver, WallpaperStore},
};
use crate::infrastructure::ConfigRepository;
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub mode: AppearanceMode,
    pub wallpaper: WallpaperUri,
}

/// Records the active wallpaper as the desired one for the current mode.
pub struct CaptureWallpaper {
    mode_observer: Arc<dyn ModePreferenceObserver>,
    wallpaper_store: Arc<dyn WallpaperStore>,
    config_repository: Arc<ConfigRepository>,
}

impl CaptureWallpaper {
    pub fn new(
        mode_observer: Arc<dyn ModePreferenceObserver>,
        wallpaper_store: Arc<dyn WallpaperStore>,
        config_repository: Arc<ConfigRepository>,
    ) -> Self {
        Self {
            mode_observer,
            wallpaper_store,
            config_repository,
        }
    }

    pub async fn execute(&self, config: &mut WallpaperConfig) -> WallchResult<CaptureOutcome> {
        let mode = self.mode_observer.current_mode().await?;
        let wallpaper = self.wallpaper_store.active_wallpaper().await?;
        tracing::debug!("Capturing {} for {} mode", wallpaper, mode.key());

        config.set_wallpaper_for(
            mode,
            ModeWallpaper::new(wallpaper.clone()).with_captured_at(Utc::now()),
        );
        self.config_repository.save(config)?;

        Ok(CaptureOutcome { mode, wallpaper })
    }
}
