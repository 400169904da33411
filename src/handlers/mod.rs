pub mod effects;
pub mod pages;

pub use pages::{auth_home_page, register, register_page, validate_register_form};

use crate::{
    auth::AuthService,
    navigation::{REGISTER_ROUTE, VALIDATE_ROUTE},
};
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub struct AppState {
    pub auth: Arc<dyn AuthService>,
}

/// Page routes of the auth flow.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/auth") }))
        .route("/auth", get(auth_home_page))
        .route(REGISTER_ROUTE, get(register_page).post(register))
        .route(VALIDATE_ROUTE, post(validate_register_form))
        .with_state(state)
}
