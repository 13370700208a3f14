use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum WallchError {
    #[error("setting {schema} {key} is unavailable: {reason}")]
    SettingUnavailable {
        schema: &'static str,
        key: &'static str,
        reason: String,
    },

    #[error("failed to {op} config {}", path.display())]
    Persistence {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("failed to {op} {}", path.display())]
    FileSystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("AccountsService call on {object} failed: {reason}")]
    Ipc { object: String, reason: String },
}

impl WallchError {
    pub fn persistence(op: &'static str, path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        WallchError::Persistence {
            op,
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn file_system(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WallchError::FileSystem {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type WallchResult<T> = std::result::Result<T, WallchError>;
