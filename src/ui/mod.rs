pub mod admin_panel;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod contact;
pub mod icon;
pub mod pages;
pub mod upload;

pub use admin_panel::AdminLayout;
pub use icon::{Icon, icons};

use crate::core::config::ApiConfig;
use crate::core::http::PlatformClient;

/// Backend client for the current build target
pub fn api_client() -> PlatformClient {
    PlatformClient::new(ApiConfig::from_build_env().base_url)
}

/// Ask the user to confirm a destructive action. Always true outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(feature = "ssr")]
    {
        let _ = message;
        true
    }
}
