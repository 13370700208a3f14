use crate::domain::entities::WallpaperUri;
use crate::domain::errors::WallchResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Makes a wallpaper visible to the login screen.
#[async_trait]
pub trait GreeterPropagator: Send + Sync {
    /// Returns the path of the copy handed to the greeter.
    async fn propagate(&self, uri: &WallpaperUri) -> WallchResult<PathBuf>;
}

/// Per-user display manager settings held by AccountsService.
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Login name of the account, as known to AccountsService.
    async fn user_name(&self) -> WallchResult<String>;

    async fn set_background_file(&self, path: &Path) -> WallchResult<()>;
}
