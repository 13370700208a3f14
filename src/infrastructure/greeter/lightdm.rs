//! LightDM greeter wallpaper propagation.
//!
//! The greeter reads its background from a per-user directory under
//! `/var/lib/lightdm-data`. That directory is treated as owned by wallch:
//! every regular file in it is removed before the new wallpaper is copied in.

use crate::domain::entities::WallpaperUri;
use crate::domain::errors::{WallchError, WallchResult};
use crate::domain::repositories::{AccountsService, GreeterPropagator};
use async_trait::async_trait;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const LIGHTDM_DATA_DIR: &str = "/var/lib/lightdm-data";

pub struct LightDmGreeterPropagator {
    wallpaper_dir: PathBuf,
    accounts: Arc<dyn AccountsService>,
}

impl LightDmGreeterPropagator {
    pub fn new(wallpaper_dir: impl Into<PathBuf>, accounts: Arc<dyn AccountsService>) -> Self {
        Self {
            wallpaper_dir: wallpaper_dir.into(),
            accounts,
        }
    }

    /// `/var/lib/lightdm-data/<user>/wallpaper`, where `<user>` is the login
    /// name AccountsService reports for the account being updated. `$USER`
    /// and `$LOGNAME` are only consulted when AccountsService is unreachable.
    pub async fn default_wallpaper_dir(accounts: &dyn AccountsService) -> anyhow::Result<PathBuf> {
        let user = match accounts.user_name().await {
            Ok(name) if !name.is_empty() => OsString::from(name),
            Ok(_) => anyhow::bail!("AccountsService reported an empty user name"),
            Err(err) => {
                tracing::warn!("Falling back to $USER for the greeter directory: {}", err);
                ["USER", "LOGNAME"]
                    .into_iter()
                    .filter_map(std::env::var_os)
                    .find(|v| !v.is_empty())
                    .ok_or_else(|| {
                        anyhow::anyhow!("cannot determine user name: USER and LOGNAME are unset")
                    })?
            }
        };

        Ok(Path::new(LIGHTDM_DATA_DIR).join(user).join("wallpaper"))
    }

    /// Replaces the directory contents with a copy of `source`, returning the
    /// path of the copy.
    fn replace_wallpaper(&self, source: &Path) -> WallchResult<PathBuf> {
        let metadata =
            fs::metadata(source).map_err(|err| WallchError::file_system("read", source, err))?;
        if !metadata.is_file() {
            return Err(WallchError::file_system(
                "read",
                source,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let file_name = source.file_name().ok_or_else(|| {
            WallchError::file_system(
                "read",
                source,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
            )
        })?;

        let dir = &self.wallpaper_dir;
        fs::create_dir_all(dir).map_err(|err| WallchError::file_system("create", dir, err))?;

        // The source may already live in the greeter directory; it must
        // survive the wipe.
        let source_real =
            fs::canonicalize(source).map_err(|err| WallchError::file_system("read", source, err))?;
        self.clear_directory(&source_real)?;

        let dest = dir.join(file_name);
        if fs::canonicalize(&dest).is_ok_and(|real| real == source_real) {
            tracing::debug!("{} is already in the greeter directory", source.display());
            return Ok(dest);
        }

        fs::copy(source, &dest).map_err(|err| WallchError::file_system("copy wallpaper to", &dest, err))?;
        tracing::debug!("Copied {} to {}", source.display(), dest.display());

        Ok(dest)
    }

    /// Removes every regular file in the directory except `keep`.
    fn clear_directory(&self, keep: &Path) -> WallchResult<()> {
        let dir = &self.wallpaper_dir;
        let entries = fs::read_dir(dir).map_err(|err| WallchError::file_system("list", dir, err))?;

        for entry in entries {
            let entry = entry.map_err(|err| WallchError::file_system("list", dir, err))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|err| WallchError::file_system("inspect", &path, err))?;

            if file_type.is_file() {
                if fs::canonicalize(&path).is_ok_and(|real| real == keep) {
                    continue;
                }
                fs::remove_file(&path).map_err(|err| WallchError::file_system("remove", &path, err))?;
                tracing::trace!("Removed old greeter wallpaper {}", path.display());
            }
        }

        Ok(())
    }
}

#[async_trait]
impl GreeterPropagator for LightDmGreeterPropagator {
    async fn propagate(&self, uri: &WallpaperUri) -> WallchResult<PathBuf> {
        let source = uri.to_path();
        let dest = self.replace_wallpaper(&source)?;
        self.accounts.set_background_file(&dest).await?;
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingAccounts {
        calls: Mutex<Vec<PathBuf>>,
        fail: bool,
    }

    #[async_trait]
    impl AccountsService for RecordingAccounts {
        async fn user_name(&self) -> WallchResult<String> {
            Ok("alice".into())
        }

        async fn set_background_file(&self, path: &Path) -> WallchResult<()> {
            if self.fail {
                return Err(WallchError::Ipc {
                    object: "/org/freedesktop/Accounts/User1000".into(),
                    reason: "service unknown".into(),
                });
            }
            self.calls.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().unwrap().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn uri_for(path: &Path) -> WallpaperUri {
        WallpaperUri::new(format!("'file://{}'", path.display()))
    }

    #[tokio::test]
    async fn propagate_replaces_directory_contents() {
        let home = TempDir::new().unwrap();
        let greeter = TempDir::new().unwrap();
        let source = home.path().join("b.jpg");
        fs::write(&source, b"dark wallpaper").unwrap();
        fs::write(greeter.path().join("a.jpg"), b"old").unwrap();
        fs::write(greeter.path().join("stale.png"), b"older").unwrap();
        fs::create_dir(greeter.path().join("keep")).unwrap();

        let accounts = Arc::new(RecordingAccounts::default());
        let propagator = LightDmGreeterPropagator::new(greeter.path(), accounts.clone());

        let dest = propagator.propagate(&uri_for(&source)).await.unwrap();

        assert_eq!(dest, greeter.path().join("b.jpg"));
        assert_eq!(file_names(greeter.path()), vec!["b.jpg".to_string()]);
        assert_eq!(fs::read(&dest).unwrap(), b"dark wallpaper");
        assert!(greeter.path().join("keep").is_dir());
        assert_eq!(*accounts.calls.lock().unwrap(), vec![dest]);
    }

    #[tokio::test]
    async fn missing_directory_is_created() {
        let home = TempDir::new().unwrap();
        let source = home.path().join("a.jpg");
        fs::write(&source, b"light").unwrap();
        let greeter_dir = home.path().join("lightdm-data/u/wallpaper");

        let propagator =
            LightDmGreeterPropagator::new(&greeter_dir, Arc::new(RecordingAccounts::default()));
        propagator.propagate(&uri_for(&source)).await.unwrap();

        assert_eq!(file_names(&greeter_dir), vec!["a.jpg".to_string()]);
    }

    #[tokio::test]
    async fn missing_source_keeps_existing_greeter_wallpaper() {
        let home = TempDir::new().unwrap();
        let greeter = TempDir::new().unwrap();
        fs::write(greeter.path().join("a.jpg"), b"old").unwrap();

        let accounts = Arc::new(RecordingAccounts::default());
        let propagator = LightDmGreeterPropagator::new(greeter.path(), accounts.clone());

        let err = propagator
            .propagate(&uri_for(&home.path().join("gone.jpg")))
            .await
            .unwrap_err();

        assert!(matches!(err, WallchError::FileSystem { op: "read", .. }), "{err}");
        assert_eq!(file_names(greeter.path()), vec!["a.jpg".to_string()]);
        assert!(accounts.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn accounts_failure_is_reported_as_ipc_error() {
        let home = TempDir::new().unwrap();
        let greeter = TempDir::new().unwrap();
        let source = home.path().join("b.jpg");
        fs::write(&source, b"dark").unwrap();

        let accounts = Arc::new(RecordingAccounts {
            fail: true,
            ..Default::default()
        });
        let propagator = LightDmGreeterPropagator::new(greeter.path(), accounts);

        let err = propagator.propagate(&uri_for(&source)).await.unwrap_err();
        assert!(matches!(err, WallchError::Ipc { .. }), "{err}");
    }

    #[tokio::test]
    async fn source_inside_greeter_directory_survives_the_wipe() {
        let greeter = TempDir::new().unwrap();
        let source = greeter.path().join("b.jpg");
        fs::write(&source, b"only copy").unwrap();
        fs::write(greeter.path().join("a.jpg"), b"old").unwrap();

        let accounts = Arc::new(RecordingAccounts::default());
        let propagator = LightDmGreeterPropagator::new(greeter.path(), accounts.clone());

        let dest = propagator.propagate(&uri_for(&source)).await.unwrap();

        assert_eq!(dest, source);
        assert_eq!(fs::read(&source).unwrap(), b"only copy");
        assert_eq!(file_names(greeter.path()), vec!["b.jpg".to_string()]);
        assert_eq!(*accounts.calls.lock().unwrap(), vec![dest]);
    }

    #[tokio::test]
    async fn default_directory_uses_the_accounts_user_name() {
        let dir = LightDmGreeterPropagator::default_wallpaper_dir(&RecordingAccounts::default())
            .await
            .unwrap();
        assert_eq!(dir, Path::new("/var/lib/lightdm-data/alice/wallpaper"));
    }
}
