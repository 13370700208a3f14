use crate::application::use_cases::*;
use crate::domain::entities::WallpaperConfig;
use crate::domain::repositories::{GreeterPropagator, ModePreferenceObserver, WallpaperStore};
use crate::infrastructure::ConfigRepository;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCaseContainer {
    pub capture: Arc<CaptureWallpaper>,
    mode_observer: Arc<dyn ModePreferenceObserver>,
    wallpaper_store: Arc<dyn WallpaperStore>,
}

impl UseCaseContainer {
    pub fn new(
        mode_observer: Arc<dyn ModePreferenceObserver>,
        wallpaper_store: Arc<dyn WallpaperStore>,
        config_repository: Arc<ConfigRepository>,
    ) -> Self {
        Self {
            capture: Arc::new(CaptureWallpaper::new(
                Arc::clone(&mode_observer),
                Arc::clone(&wallpaper_store),
                config_repository,
            )),
            mode_observer,
            wallpaper_store,
        }
    }

    /// Builds the synchronizer around a config loaded at startup.
    pub fn synchronizer(
        &self,
        greeter: Arc<dyn GreeterPropagator>,
        config: WallpaperConfig,
        interval: Duration,
    ) -> SyncWallpaper {
        SyncWallpaper::new(
            Arc::clone(&self.mode_observer),
            Arc::clone(&self.wallpaper_store),
            greeter,
            config,
        )
        .with_interval(interval)
    }
}
