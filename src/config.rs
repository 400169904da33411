use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// auth-register - account registration pages backed by a remote auth API
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "AR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "AR_PORT", default_value = "3000")]
    pub port: String,

    /// Root URL of the remote auth API (registration is POSTed to `<root>/auth/register`)
    #[arg(long, env = "AR_AUTH_API_URL", default_value = "http://127.0.0.1:8080/api")]
    pub auth_api_url: String,

    /// Request timeout for auth API calls, in seconds
    #[arg(long, env = "AR_AUTH_API_TIMEOUT_SECS", default_value = "30")]
    pub auth_api_timeout_secs: u64,

    /// Static files directory
    #[arg(long, env = "AR_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

impl Config {
    /// Address the HTTP server binds to
    pub fn get_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn get_auth_api_timeout(&self) -> Duration {
        Duration::from_secs(self.auth_api_timeout_secs)
    }
}
