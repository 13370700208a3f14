use super::{COLOR_SCHEME, command::GSettingsCommand};
use crate::domain::{
    entities::AppearanceMode,
    errors::{WallchError, WallchResult},
    repositories::ModePreferenceObserver,
};
use async_trait::async_trait;

pub struct GSettingsModeObserver;

impl GSettingsModeObserver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModePreferenceObserver for GSettingsModeObserver {
    async fn current_mode(&self) -> WallchResult<AppearanceMode> {
        let raw = tokio::task::spawn_blocking(|| GSettingsCommand::get(COLOR_SCHEME))
            .await
            .map_err(|err| WallchError::SettingUnavailable {
                schema: COLOR_SCHEME.schema,
                key: COLOR_SCHEME.key,
                reason: err.to_string(),
            })??;
        Ok(AppearanceMode::from_setting_value(&raw))
    }
}
