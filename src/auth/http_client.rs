use super::{AuthError, AuthService};
use crate::form::RegistrationValue;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Error body returned by the auth API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`AuthService`] backed by the auth REST API.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: reqwest::Client,
    register_url: Url,
}

impl HttpAuthService {
    /// `base_url` is the API root, e.g. `https://example.com/api`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let register_url = base.join("auth/register")?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            register_url,
        })
    }

    pub fn register_url(&self) -> &Url {
        &self.register_url
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn register(&self, value: &RegistrationValue) -> Result<(), AuthError> {
        tracing::debug!("POST {} for user {}", self.register_url, value.username);

        let response = self
            .client
            .post(self.register_url.clone())
            .json(value)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                format!(
                    "Http failure response for {}: {} {}",
                    self.register_url,
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
                .trim_end()
                .to_string()
            });

        Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
