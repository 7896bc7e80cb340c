use std::str::FromStr;

use super::VERIFY_PATH;
use crate::core::http::{ApiRequest, HttpClient};
use crate::core::session::SessionStore;

/// Outcome of a protected-view mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Initial state on every mount
    #[default]
    Checking,
    /// Render the protected subtree
    Authenticated,
    /// Redirect to login and render nothing
    Unauthenticated,
}

/// Inputs that drive the gate out of [`GateState::Checking`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    NoToken,
    TokenTrusted,
    VerifySucceeded,
    VerifyRejected,
    VerifyFailed,
}

impl GateState {
    /// Both outcome states are terminal for the mount.
    pub fn transition(self, event: GateEvent) -> GateState {
        match (self, event) {
            (GateState::Checking, GateEvent::TokenTrusted | GateEvent::VerifySucceeded) => {
                GateState::Authenticated
            }
            (
                GateState::Checking,
                GateEvent::NoToken | GateEvent::VerifyRejected | GateEvent::VerifyFailed,
            ) => GateState::Unauthenticated,
            (terminal, _) => terminal,
        }
    }
}

/// How the gate decides that a stored token is good
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateMode {
    /// A present token is enough
    #[default]
    TrustLocal,
    /// Confirm the token with the backend verification endpoint
    VerifyWithBackend,
}

impl FromStr for GateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trust" | "local" => Ok(GateMode::TrustLocal),
            "verify" | "backend" => Ok(GateMode::VerifyWithBackend),
            other => Err(format!("unknown gate mode: {}", other)),
        }
    }
}

/// Decides whether a protected view may render.
///
/// Fails closed: a verification call that errors is treated like a
/// rejected token. No retry is attempted.
#[derive(Debug, Clone)]
pub struct AuthGate<H, S> {
    http: H,
    store: S,
    mode: GateMode,
}

impl<H: HttpClient, S: SessionStore> AuthGate<H, S> {
    pub fn new(http: H, store: S, mode: GateMode) -> Self {
        Self { http, store, mode }
    }

    /// Run the check for one mount and return the settled state.
    pub async fn check(&self) -> GateState {
        let state = GateState::Checking;
        let session = self.store.get();

        let Some(token) = session.access_token.clone().filter(|t| !t.is_empty()) else {
            return state.transition(GateEvent::NoToken);
        };

        let event = match self.mode {
            GateMode::TrustLocal => GateEvent::TokenTrusted,
            GateMode::VerifyWithBackend => self.verify(&token).await,
        };

        match event {
            GateEvent::TokenTrusted | GateEvent::VerifySucceeded => {
                if !session.authenticated {
                    let mut session = session;
                    session.authenticated = true;
                    self.store.set(session);
                }
            }
            GateEvent::VerifyRejected => self.store.clear(),
            GateEvent::NoToken | GateEvent::VerifyFailed => {}
        }

        let settled = state.transition(event);
        tracing::debug!(mode = ?self.mode, ?event, ?settled, "auth gate settled");
        settled
    }

    async fn verify(&self, token: &str) -> GateEvent {
        match self.http.send(ApiRequest::post(VERIFY_PATH).bearer(token)).await {
            Ok(response) if response.is_success() => GateEvent::VerifySucceeded,
            Ok(response) => {
                tracing::debug!(status = response.status, "token verification rejected");
                GateEvent::VerifyRejected
            }
            Err(e) => {
                tracing::warn!("token verification failed: {}", e);
                GateEvent::VerifyFailed
            }
        }
    }
}
