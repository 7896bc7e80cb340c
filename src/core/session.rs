//! Session value and the stores that persist it.
//!
//! The browser store keeps the session in localStorage and mirrors the
//! access token into a cookie so the server-side `/admin` guard can see it.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// localStorage key holding the serialized session
pub const STORAGE_KEY_SESSION: &str = "vinilos_session";

/// Cookie mirroring the access token for the server-side route guard
pub const SESSION_COOKIE: &str = "vinilos_access";

/// Credentials of the current browser client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub authenticated: bool,
}

impl Session {
    /// Session created by a successful login
    pub fn authenticated(access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token,
            authenticated: true,
        }
    }

    /// Session known only by its access token, not yet checked
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: None,
            authenticated: false,
        }
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// A session claiming `authenticated` without a token is treated as empty.
    pub fn normalized(self) -> Self {
        if self.authenticated && !self.has_access_token() {
            Self::default()
        } else {
            self
        }
    }
}

/// Owner of the one session per client
pub trait SessionStore {
    fn get(&self) -> Session;
    fn set(&self, session: Session);
    fn clear(&self);

    /// Replace the access token after a refresh; a rotated refresh token
    /// replaces the stored one, otherwise the old one is kept.
    fn update_access_token(&self, access_token: String, refresh_token: Option<String>) {
        let mut session = self.get();
        session.access_token = Some(access_token);
        if refresh_token.is_some() {
            session.refresh_token = refresh_token;
        }
        self.set(session);
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self) -> Session {
        (**self).get()
    }

    fn set(&self, session: Session) {
        (**self).set(session)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory store, used per request on the server and in tests
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .normalized()
    }

    fn set(&self, session: Session) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    fn clear(&self) {
        self.set(Session::default());
    }
}

/// localStorage-backed store for the browser
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(not(feature = "ssr"))]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn write_cookie(value: &str, max_age: Option<u32>) {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        let cookie = match max_age {
            Some(age) => format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                SESSION_COOKIE, value, age
            ),
            None => format!("{}=; Path=/; Max-Age=0; SameSite=Lax", SESSION_COOKIE),
        };
        if document.set_cookie(&cookie).is_err() {
            tracing::warn!("failed to write session cookie");
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Session {
        Self::storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY_SESSION).ok().flatten())
            .and_then(|json| serde_json::from_str::<Session>(&json).ok())
            .unwrap_or_default()
            .normalized()
    }

    fn set(&self, session: Session) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        match serde_json::to_string(&session) {
            Ok(json) => {
                if storage.set_item(STORAGE_KEY_SESSION, &json).is_err() {
                    tracing::warn!("failed to persist session");
                }
            }
            Err(e) => tracing::warn!("failed to serialize session: {}", e),
        }
        match session.access_token.as_deref() {
            Some(token) if !token.is_empty() => Self::write_cookie(token, Some(60 * 60 * 24 * 7)),
            _ => Self::write_cookie("", None),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY_SESSION);
        }
        Self::write_cookie("", None);
    }
}

/// Store for the current build target
#[cfg(not(feature = "ssr"))]
pub fn platform_store() -> BrowserSessionStore {
    BrowserSessionStore
}

/// Store for the current build target. Server renders never see a session.
#[cfg(feature = "ssr")]
pub fn platform_store() -> MemorySessionStore {
    MemorySessionStore::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_clear() {
        let store = MemorySessionStore::default();
        assert_eq!(store.get(), Session::default());

        let session = Session::authenticated("access".into(), Some("refresh".into()));
        store.set(session.clone());
        assert_eq!(store.get(), session);

        store.clear();
        assert_eq!(store.get(), Session::default());
        assert!(!store.get().has_access_token());
    }

    #[test]
    fn test_update_access_token_keeps_refresh_when_not_rotated() {
        let store = MemorySessionStore::new(Session::authenticated(
            "old".into(),
            Some("refresh-1".into()),
        ));

        store.update_access_token("new".into(), None);
        let session = store.get();
        assert_eq!(session.access_token.as_deref(), Some("new"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));

        store.update_access_token("newer".into(), Some("refresh-2".into()));
        assert_eq!(store.get().refresh_token.as_deref(), Some("refresh-2"));
    }

    #[test]
    fn test_authenticated_without_token_reads_as_empty() {
        let store = MemorySessionStore::new(Session {
            access_token: None,
            refresh_token: Some("r".into()),
            authenticated: true,
        });
        assert_eq!(store.get(), Session::default());

        let empty_token = Session {
            access_token: Some(String::new()),
            refresh_token: None,
            authenticated: true,
        };
        assert_eq!(empty_token.normalized(), Session::default());
    }

    #[test]
    fn test_session_serde_defaults_authenticated() {
        let session: Session =
            serde_json::from_str(r#"{"access_token":"a","refresh_token":null}"#).unwrap();
        assert!(!session.authenticated);
        assert!(session.has_access_token());
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemorySessionStore::default();
        let by_ref = &store;
        by_ref.set(Session::from_access_token("t"));
        assert_eq!(store.get().access_token.as_deref(), Some("t"));
    }
}
