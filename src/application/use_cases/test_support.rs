//! Recording fakes for the domain traits.

use crate::domain::{
    entities::{AppearanceMode, WallpaperUri},
    errors::{WallchError, WallchResult},
    repositories::{GreeterPropagator, ModePreferenceObserver, WallpaperStore},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

fn unavailable(schema: &'static str, key: &'static str) -> WallchError {
    WallchError::SettingUnavailable {
        schema,
        key,
        reason: "No such schema".into(),
    }
}

pub struct FakeModeObserver {
    mode: Mutex<Option<AppearanceMode>>,
    queries: AtomicUsize,
}

impl FakeModeObserver {
    pub fn new(mode: AppearanceMode) -> Self {
        Self {
            mode: Mutex::new(Some(mode)),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            mode: Mutex::new(None),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn switch_to(&self, mode: AppearanceMode) {
        *self.mode.lock().unwrap() = Some(mode);
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModePreferenceObserver for FakeModeObserver {
    async fn current_mode(&self) -> WallchResult<AppearanceMode> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.mode
            .lock()
            .unwrap()
            .ok_or_else(|| unavailable("org.freedesktop", "prefers-color-scheme"))
    }
}

pub struct FakeWallpaperStore {
    active: Mutex<WallpaperUri>,
    set_calls: Mutex<Vec<WallpaperUri>>,
    fail_set: bool,
}

impl FakeWallpaperStore {
    pub fn new(active: &str) -> Self {
        Self {
            active: Mutex::new(WallpaperUri::new(active)),
            set_calls: Mutex::new(Vec::new()),
            fail_set: false,
        }
    }

    pub fn failing_set(active: &str) -> Self {
        Self {
            fail_set: true,
            ..Self::new(active)
        }
    }

    pub fn set_calls(&self) -> Vec<WallpaperUri> {
        self.set_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WallpaperStore for FakeWallpaperStore {
    async fn active_wallpaper(&self) -> WallchResult<WallpaperUri> {
        Ok(self.active.lock().unwrap().clone())
    }

    async fn set_active_wallpaper(&self, uri: &WallpaperUri) -> WallchResult<()> {
        if self.fail_set {
            return Err(unavailable("org.gnome.desktop.background", "picture-uri"));
        }
        self.set_calls.lock().unwrap().push(uri.clone());
        *self.active.lock().unwrap() = uri.clone();
        Ok(())
    }
}

pub struct FakeGreeter {
    dir: PathBuf,
    calls: Mutex<Vec<WallpaperUri>>,
    fail: bool,
}

impl FakeGreeter {
    pub fn new() -> Self {
        Self {
            dir: PathBuf::from("/var/lib/lightdm-data/u/wallpaper"),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn calls(&self) -> Vec<WallpaperUri> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GreeterPropagator for FakeGreeter {
    async fn propagate(&self, uri: &WallpaperUri) -> WallchResult<PathBuf> {
        self.calls.lock().unwrap().push(uri.clone());
        if self.fail {
            return Err(WallchError::Ipc {
                object: "/org/freedesktop/Accounts/User1000".into(),
                reason: "property rejected".into(),
            });
        }
        let name = uri.to_path().file_name().map(PathBuf::from).unwrap_or_default();
        Ok(self.dir.join(name))
    }
}
