pub mod greeter_propagator;
pub mod mode_preference_observer;
pub mod wallpaper_store;

pub use greeter_propagator::{AccountsService, GreeterPropagator};
pub use mode_preference_observer::ModePreferenceObserver;
pub use wallpaper_store::WallpaperStore;
