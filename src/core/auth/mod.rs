//! Client-side authentication: login, token refresh, and the session gate
//! that decides whether admin views render.

mod authorized;
mod gate;
mod login;
mod refresh;

pub use authorized::AuthorizedClient;
pub use gate::{AuthGate, GateEvent, GateMode, GateState};
pub use login::{Credentials, LoginError, LoginFlow, logout, redirect_target};
pub use refresh::{RefreshedTokens, TokenRefreshClient};

/// Credential exchange endpoint
pub const LOGIN_PATH: &str = "/api/auth/login/";
/// Refresh-token exchange endpoint
pub const REFRESH_PATH: &str = "/api/auth/token/refresh/";
/// Bearer token verification endpoint
pub const VERIFY_PATH: &str = "/auth/verify/";
