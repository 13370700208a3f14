pub mod capture_wallpaper;
pub mod sync_wallpaper;

#[cfg(test)]
pub(crate) mod test_support;

pub use capture_wallpaper::*;
pub use sync_wallpaper::*;
