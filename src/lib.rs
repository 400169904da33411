// Library exports for integration tests
pub mod auth;
pub mod config;
pub mod form;
pub mod handlers;
pub mod navigation;
pub mod notification;
pub mod screen;
pub mod templates;
