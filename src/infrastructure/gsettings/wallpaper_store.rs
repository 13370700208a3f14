use super::{PICTURE_URI, command::GSettingsCommand};
use crate::domain::{
    entities::WallpaperUri,
    errors::{WallchError, WallchResult},
    repositories::WallpaperStore,
};
use async_trait::async_trait;

pub struct GSettingsWallpaperStore;

impl GSettingsWallpaperStore {
    pub fn new() -> Self {
        Self
    }

    fn join_error(err: tokio::task::JoinError) -> WallchError {
        WallchError::SettingUnavailable {
            schema: PICTURE_URI.schema,
            key: PICTURE_URI.key,
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl WallpaperStore for GSettingsWallpaperStore {
    async fn active_wallpaper(&self) -> WallchResult<WallpaperUri> {
        let raw = tokio::task::spawn_blocking(|| GSettingsCommand::get(PICTURE_URI))
            .await
            .map_err(Self::join_error)??;
        Ok(WallpaperUri::new(raw))
    }

    async fn set_active_wallpaper(&self, uri: &WallpaperUri) -> WallchResult<()> {
        let value = uri.as_str().to_string();
        tokio::task::spawn_blocking(move || GSettingsCommand::set(PICTURE_URI, &value))
            .await
            .map_err(Self::join_error)??;
        tracing::info!("Desktop wallpaper set to {}", uri);
        Ok(())
    }
}
