pub mod auth_home;
pub mod components;
pub mod layout;
pub mod register;

pub use auth_home::auth_home;
pub use layout::base;
pub use register::{register, validation_feedback};
