pub mod config_repository;
pub mod greeter;
pub mod gsettings;

pub use config_repository::ConfigRepository;
