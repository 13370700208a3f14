mod application;
mod args;
mod domain;
mod infrastructure;
mod logging;
mod output;

use anyhow::Context;
use application::UseCaseContainer;
use domain::repositories::{AccountsService, GreeterPropagator};
use infrastructure::ConfigRepository;
use infrastructure::greeter::{AccountsServiceProxy, LightDmGreeterPropagator};
use infrastructure::gsettings::{GSettingsModeObserver, GSettingsWallpaperStore};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(err) = real_main().await {
        output::print_error(&err);
        std::process::exit(1);
    }
}

async fn real_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    let cli = args::Cli::parse();

    let config_repository = Arc::new(match cli.config {
        Some(path) => ConfigRepository::with_path(path),
        None => ConfigRepository::new(),
    });
    let mut config = config_repository
        .load()
        .context("load wallpaper config")?;

    let use_cases = UseCaseContainer::new(
        Arc::new(GSettingsModeObserver::new()),
        Arc::new(GSettingsWallpaperStore::new()),
        Arc::clone(&config_repository),
    );

    if cli.set {
        let outcome = use_cases
            .capture
            .execute(&mut config)
            .await
            .context("capture current wallpaper")?;
        println!("{} wallpaper set to: {}", outcome.mode, outcome.wallpaper);
        return Ok(());
    }

    tracing::debug!("Loaded config from {}", config_repository.path().display());
    if config.is_empty() {
        tracing::warn!("No wallpapers captured yet; run `wallch --set` in light and dark mode");
    }

    let accounts: Arc<dyn AccountsService> = Arc::new(AccountsServiceProxy::for_current_user());
    let greeter_dir = match cli.greeter_dir {
        Some(dir) => dir,
        None => LightDmGreeterPropagator::default_wallpaper_dir(accounts.as_ref()).await?,
    };
    tracing::debug!("Greeter wallpaper directory: {}", greeter_dir.display());
    let greeter: Arc<dyn GreeterPropagator> =
        Arc::new(LightDmGreeterPropagator::new(greeter_dir, accounts));

    let synchronizer =
        use_cases.synchronizer(greeter, config, Duration::from_secs(cli.interval));
    synchronizer.run(shutdown_signal()).await;
    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(err) => {
            tracing::warn!("Cannot listen for SIGTERM: {}", err);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}
