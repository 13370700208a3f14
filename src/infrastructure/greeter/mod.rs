pub mod accounts;
pub mod lightdm;

pub use accounts::AccountsServiceProxy;
pub use lightdm::LightDmGreeterPropagator;
