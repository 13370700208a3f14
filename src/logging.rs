use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the stderr subscriber. `RUST_LOG` overrides the default level.
pub fn init() {
    #[cfg(debug_assertions)]
    let level = LevelFilter::TRACE;

    #[cfg(all(not(debug_assertions), feature = "verbose-logging"))]
    let level = LevelFilter::DEBUG;

    #[cfg(all(not(debug_assertions), not(feature = "verbose-logging")))]
    let level = LevelFilter::INFO;

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
