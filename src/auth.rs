//! Remote authentication service.
//!
//! The screen only needs a single call, [`AuthService::register`]. The HTTP
//! implementation lives in [`http_client`].

mod http_client;

pub use http_client::HttpAuthService;

use crate::form::RegistrationValue;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by the auth service. The `Display` output is the
/// human-readable message shown to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid auth service URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account. Success carries no payload.
    async fn register(&self, value: &RegistrationValue) -> Result<(), AuthError>;
}
