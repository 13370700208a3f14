use crate::domain::{
    entities::{AppearanceMode, WallpaperConfig, WallpaperUri},
    errors::WallchResult,
    repositories::{GreeterPropagator, ModePreferenceObserver, WallpaperStore},
};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No wallpaper has been captured for this mode yet.
    Unconfigured(AppearanceMode),
    InSync(AppearanceMode),
    Converged {
        mode: AppearanceMode,
        wallpaper: WallpaperUri,
        greeter_file: PathBuf,
    },
}

/// Keeps the desktop and greeter wallpaper in line with the appearance mode.
///
/// The config is read once at construction; captures made by another process
/// are only seen after a restart.
pub struct SyncWallpaper {
    mode_observer: Arc<dyn ModePreferenceObserver>,
    wallpaper_store: Arc<dyn WallpaperStore>,
    greeter: Arc<dyn GreeterPropagator>,
    config: WallpaperConfig,
    interval: Duration,
}

impl SyncWallpaper {
    pub fn new(
        mode_observer: Arc<dyn ModePreferenceObserver>,
        wallpaper_store: Arc<dyn WallpaperStore>,
        greeter: Arc<dyn GreeterPropagator>,
        config: WallpaperConfig,
    ) -> Self {
        Self {
            mode_observer,
            wallpaper_store,
            greeter,
            config,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// One poll. Side effects happen only when the active wallpaper differs
    /// from the one configured for the current mode.
    pub async fn sync_once(&self) -> WallchResult<SyncOutcome> {
        let mode = self.mode_observer.current_mode().await?;
        let current = self.wallpaper_store.active_wallpaper().await?;

        let Some(desired) = self.config.wallpaper_for(mode) else {
            return Ok(SyncOutcome::Unconfigured(mode));
        };

        if current == *desired {
            return Ok(SyncOutcome::InSync(mode));
        }

        tracing::info!("{} mode: switching wallpaper from {} to {}", mode, current, desired);
        self.wallpaper_store.set_active_wallpaper(desired).await?;
        let greeter_file = self.greeter.propagate(desired).await?;

        Ok(SyncOutcome::Converged {
            mode,
            wallpaper: desired.clone(),
            greeter_file,
        })
    }

    /// Polls until `shutdown` resolves. Failed polls are logged and retried
    /// on the next interval.
    pub async fn run<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut iteration: u64 = 0;

        tracing::info!("Watching appearance mode every {}s", self.interval.as_secs());

        loop {
            iteration += 1;
            match self.sync_once().await {
                Ok(SyncOutcome::Unconfigured(mode)) => {
                    tracing::debug!(
                        "Poll #{}: no {} wallpaper captured, run with --set to record one",
                        iteration,
                        mode.key()
                    );
                }
                Ok(SyncOutcome::InSync(mode)) => {
                    tracing::debug!("Poll #{}: {} wallpaper already active", iteration, mode.key());
                }
                Ok(SyncOutcome::Converged {
                    mode,
                    wallpaper,
                    greeter_file,
                }) => {
                    tracing::info!(
                        "Poll #{}: applied {} wallpaper {} (greeter: {})",
                        iteration,
                        mode.key(),
                        wallpaper,
                        greeter_file.display()
                    );
                }
                Err(err) => {
                    let err = anyhow::Error::new(err);
                    tracing::error!("Poll #{} failed: {:#}", iteration, err);
                }
            }

            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Stopping after {} polls", iteration);
                    return;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
