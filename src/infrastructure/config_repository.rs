use crate::domain::entities::WallpaperConfig;
use crate::domain::errors::{WallchError, WallchResult};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// `$XDG_CONFIG_HOME/wallch/config.json`, falling back to `~/.config`.
    pub fn default_path() -> PathBuf {
        let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => match std::env::var_os("HOME") {
                Some(home) => PathBuf::from(home).join(".config"),
                None => PathBuf::from("."),
            },
        };

        config_home.join("wallch").join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> WallchResult<WallpaperConfig> {
        if !self.config_path.exists() {
            tracing::debug!("No config at {}, starting empty", self.config_path.display());
            return Ok(WallpaperConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|err| WallchError::persistence("read", &self.config_path, err))?;

        let config = serde_json::from_str(&content)
            .map_err(|err| WallchError::persistence("parse", &self.config_path, err))?;

        Ok(config)
    }

    /// Replaces the stored config. The new content goes to a sibling temp
    /// file first, so an interrupted write never truncates the old one.
    pub fn save(&self, config: &WallpaperConfig) -> WallchResult<()> {
        let path = &self.config_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| WallchError::persistence("create directory for", path, err))?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|err| WallchError::persistence("serialize", path, err))?;

        let tmp = self.temp_path();
        fs::write(&tmp, content).map_err(|err| WallchError::persistence("write", &tmp, err))?;
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(WallchError::persistence("replace", path, err));
        }

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .config_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("config.json");
        self.config_path.with_file_name(format!(".{name}.tmp"))
    }
}
