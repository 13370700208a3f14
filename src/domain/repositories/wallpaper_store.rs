use crate::domain::entities::WallpaperUri;
use crate::domain::errors::WallchResult;
use async_trait::async_trait;

#[async_trait]
pub trait WallpaperStore: Send + Sync {
    async fn active_wallpaper(&self) -> WallchResult<WallpaperUri>;
    async fn set_active_wallpaper(&self, uri: &WallpaperUri) -> WallchResult<()>;
}
