use crate::domain::entities::AppearanceMode;
use crate::domain::errors::WallchResult;
use async_trait::async_trait;

#[async_trait]
pub trait ModePreferenceObserver: Send + Sync {
    async fn current_mode(&self) -> WallchResult<AppearanceMode>;
}
