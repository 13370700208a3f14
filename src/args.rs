//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "wallch")]
#[command(
    about = "Keep the desktop and greeter wallpaper in sync with the light/dark preference",
    long_about = None
)]
pub struct Cli {
    /// Store the current wallpaper as the light or dark wallpaper, then exit.
    #[arg(short, long)]
    pub set: bool,

    /// Config file holding the per-mode wallpapers.
    #[arg(long, env = "WALLCH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seconds between appearance mode polls.
    #[arg(long, env = "WALLCH_INTERVAL", value_name = "SECS", default_value_t = 120,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Greeter wallpaper directory. Every file in it is replaced on update.
    #[arg(long, env = "WALLCH_GREETER_DIR", value_name = "PATH")]
    pub greeter_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sync_mode() {
        let cli = Cli::try_parse_from(["wallch"]).unwrap();
        assert!(!cli.set);
        assert_eq!(cli.interval, 120);
        assert!(cli.greeter_dir.is_none());
    }

    #[test]
    fn set_flag_selects_capture() {
        assert!(Cli::try_parse_from(["wallch", "-s"]).unwrap().set);
        assert!(Cli::try_parse_from(["wallch", "--set"]).unwrap().set);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["wallch", "--interval", "0"]).is_err());
    }
}
