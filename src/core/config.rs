//! Application configuration.
//!
//! The server loads [`Config`] from environment variables after calling
//! `dotenvy::dotenv()`. The browser bundle gets the backend URL at build
//! time through [`ApiConfig::from_build_env`].

#[cfg(feature = "ssr")]
use super::auth::GateMode;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://vinilos-backend-2cwk.onrender.com";

/// Where the shop backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `VINILOS_API_URL` at compile time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("VINILOS_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL
    /// Example: https://vinilos-backend-2cwk.onrender.com
    pub api_base_url: Option<String>,

    /// How the `/admin` guard treats the session cookie: `trust` or `verify`
    pub admin_guard_mode: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL").ok(),
            admin_guard_mode: std::env::var("ADMIN_GUARD_MODE").ok(),
        }
    }

    /// Check if a backend URL is configured
    pub fn has_api_base_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    pub fn api(&self) -> ApiConfig {
        match self.api_base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => ApiConfig::new(url.trim()),
            _ => ApiConfig::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Guard mode; unset or unrecognized values fall back to trusting the cookie
    pub fn guard_mode(&self) -> GateMode {
        match self.admin_guard_mode.as_deref().map(str::parse::<GateMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!("{}, falling back to trust", e);
                GateMode::TrustLocal
            }
            None => GateMode::TrustLocal,
        }
    }
}
