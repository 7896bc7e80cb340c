//! Server-side route guard for `/admin` and `/admin/*`.
//!
//! The browser mirrors its access token into the session cookie; the guard
//! runs the same [`AuthGate`] the client uses against that cookie and
//! redirects to the login page when the gate settles as unauthenticated.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::auth::{AuthGate, GateMode, GateState};
use super::http::HttpClient;
use super::routes;
use super::session::{MemorySessionStore, SESSION_COOKIE, Session, SessionStore};

/// Guard state shared by all requests
#[derive(Debug)]
pub struct GuardState<H> {
    http: Arc<H>,
    mode: GateMode,
}

impl<H> Clone for GuardState<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            mode: self.mode,
        }
    }
}

impl<H: HttpClient> GuardState<H> {
    pub fn new(http: H, mode: GateMode) -> Self {
        Self {
            http: Arc::new(http),
            mode,
        }
    }
}

/// Axum middleware; install with `axum::middleware::from_fn_with_state`.
pub async fn admin_guard<H: HttpClient + Send + Sync + 'static>(
    State(guard): State<GuardState<H>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if !routes::is_protected(&path) {
        return next.run(request).await;
    }

    let session = jar
        .get(SESSION_COOKIE)
        .map(|cookie| Session::from_access_token(cookie.value()))
        .unwrap_or_default();
    let store = MemorySessionStore::new(session);

    match AuthGate::new(guard.http.as_ref(), &store, guard.mode).check().await {
        GateState::Authenticated => next.run(request).await,
        GateState::Checking | GateState::Unauthenticated => {
            tracing::info!(%path, "redirecting unauthenticated request to login");
            // A cookie the gate rejected is dropped; one kept after a failed
            // verification call stays for the next request.
            let jar = if store.get().has_access_token() {
                jar
            } else {
                jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
            };
            (jar, Redirect::to(&routes::login_redirect(&path))).into_response()
        }
    }
}
