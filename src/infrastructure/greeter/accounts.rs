//! AccountsService client for the display manager background property.

use crate::domain::errors::{WallchError, WallchResult};
use crate::domain::repositories::AccountsService;
use async_trait::async_trait;
use std::path::Path;
use zbus::{Connection, proxy};

#[proxy(
    interface = "org.freedesktop.DisplayManager.AccountsService",
    default_service = "org.freedesktop.Accounts",
    gen_blocking = false
)]
trait DisplayManagerUser {
    /// Image shown behind the greeter for this user.
    #[zbus(property)]
    fn set_background_file(&self, value: &str) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.freedesktop.Accounts.User",
    default_service = "org.freedesktop.Accounts",
    gen_blocking = false
)]
trait AccountsUser {
    #[zbus(property)]
    fn user_name(&self) -> zbus::Result<String>;
}

/// Talks to `org.freedesktop.Accounts` on the system bus for one user.
pub struct AccountsServiceProxy {
    object_path: String,
}

impl AccountsServiceProxy {
    pub fn new(uid: u32) -> Self {
        Self {
            object_path: Self::object_path(uid),
        }
    }

    /// AccountsService object for the user running this process.
    pub fn for_current_user() -> Self {
        Self::new(rustix::process::getuid().as_raw())
    }

    pub fn object_path(uid: u32) -> String {
        format!("/org/freedesktop/Accounts/User{uid}")
    }

    fn ipc_error(&self, err: zbus::Error) -> WallchError {
        WallchError::Ipc {
            object: self.object_path.clone(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl AccountsService for AccountsServiceProxy {
    async fn user_name(&self) -> WallchResult<String> {
        let connection = Connection::system().await.map_err(|e| self.ipc_error(e))?;
        let proxy = AccountsUserProxy::builder(&connection)
            .path(self.object_path.as_str())
            .map_err(|e| self.ipc_error(e))?
            .build()
            .await
            .map_err(|e| self.ipc_error(e))?;

        proxy.user_name().await.map_err(|e| self.ipc_error(e))
    }

    async fn set_background_file(&self, path: &Path) -> WallchResult<()> {
        let value = path.to_str().ok_or_else(|| WallchError::Ipc {
            object: self.object_path.clone(),
            reason: format!("{} is not valid UTF-8", path.display()),
        })?;

        let connection = Connection::system().await.map_err(|e| self.ipc_error(e))?;
        let proxy = DisplayManagerUserProxy::builder(&connection)
            .path(self.object_path.as_str())
            .map_err(|e| self.ipc_error(e))?
            .build()
            .await
            .map_err(|e| self.ipc_error(e))?;

        proxy
            .set_background_file(value)
            .await
            .map_err(|e| self.ipc_error(e))?;

        tracing::info!("Greeter background for {} set to {}", self.object_path, value);
        Ok(())
    }
}
