use serde::{Deserialize, Serialize};

use super::LOGIN_PATH;
use crate::core::error::ApiError;
use crate::core::http::{ApiRequest, HttpClient};
use crate::core::routes;
use crate::core::session::{Session, SessionStore};

/// Username/password pair posted to the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(alias = "access_token", alias = "token")]
    access: String,
    #[serde(default, alias = "refresh_token")]
    refresh: Option<String>,
}

/// Login failures, with the message shown on the login page
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Introduce usuario y contraseña")]
    MissingFields,

    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,

    #[error("Error al iniciar sesión. Por favor, intente de nuevo.")]
    Unavailable(ApiError),
}

/// Submits credentials and persists the resulting session
#[derive(Debug, Clone)]
pub struct LoginFlow<H, S> {
    http: H,
    store: S,
}

impl<H: HttpClient, S: SessionStore> LoginFlow<H, S> {
    pub fn new(http: H, store: S) -> Self {
        Self { http, store }
    }

    /// Log in. On success the session is stored and returned; on failure the
    /// store is left untouched.
    pub async fn submit(&self, username: &str, password: &str) -> Result<Session, LoginError> {
        let credentials = Credentials::new(username, password);
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let request = ApiRequest::post(LOGIN_PATH)
            .json(&credentials)
            .map_err(LoginError::Unavailable)?;

        let response = self
            .http
            .send(request)
            .await
            .map_err(LoginError::Unavailable)?;

        let response = response.into_result().map_err(|e| match e {
            ApiError::Unauthorized | ApiError::Validation(_) => LoginError::InvalidCredentials,
            other => LoginError::Unavailable(other),
        })?;

        let tokens: LoginResponse = response.json().map_err(LoginError::Unavailable)?;
        if tokens.access.is_empty() {
            return Err(LoginError::Unavailable(ApiError::Decode(
                "empty access token".to_string(),
            )));
        }

        let session = Session::authenticated(tokens.access, tokens.refresh);
        self.store.set(session.clone());
        tracing::info!(username = %credentials.username, "admin logged in");
        Ok(session)
    }
}

/// Where to go after a successful login. Only admin paths are honored as
/// `next`, so the login page cannot be used as an open redirect.
pub fn redirect_target(next: Option<&str>) -> String {
    next.filter(|path| routes::is_protected(path) && !path.contains("//"))
        .unwrap_or(routes::ADMIN)
        .to_string()
}

/// Drop the stored session
pub fn logout<S: SessionStore>(store: &S) {
    store.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::Body;
    use crate::core::session::MemorySessionStore;
    use crate::core::test_support::ScriptedHttp;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_success_stores_session() {
        let http = ScriptedHttp::new().reply_json(200, json!({ "access": "a", "refresh": "r" }));
        let store = MemorySessionStore::default();
        let flow = LoginFlow::new(&http, &store);

        let session = flow.submit(" admin ", "correct").await.unwrap();
        assert_eq!(session, Session::authenticated("a".into(), Some("r".into())));
        assert_eq!(store.get(), session);

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, LOGIN_PATH);
        assert_eq!(
            requests[0].body,
            Body::Json(json!({ "username": "admin", "password": "correct" }))
        );
    }

    #[tokio::test]
    async fn test_login_accepts_token_alias() {
        let http = ScriptedHttp::new().reply_json(200, json!({ "token": "only-access" }));
        let store = MemorySessionStore::default();

        let session = LoginFlow::new(&http, &store).submit("admin", "pw").await.unwrap();
        assert_eq!(session.access_token.as_deref(), Some("only-access"));
        assert_eq!(session.refresh_token, None);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        for status in [400, 401] {
            let http = ScriptedHttp::new().reply(status, r#"{"detail":"No active account"}"#);
            let store = MemorySessionStore::default();

            let err = LoginFlow::new(&http, &store)
                .submit("admin", "wrong")
                .await
                .unwrap_err();
            assert_eq!(err, LoginError::InvalidCredentials);
            assert_eq!(err.to_string(), "Usuario o contraseña incorrectos");
            assert_eq!(store.get(), Session::default());
        }
    }

    #[tokio::test]
    async fn test_server_and_network_errors_are_distinguished() {
        let http = ScriptedHttp::new()
            .reply(503, "")
            .fail(ApiError::Network("offline".into()));
        let store = MemorySessionStore::default();
        let flow = LoginFlow::new(&http, &store);

        assert_eq!(
            flow.submit("admin", "pw").await,
            Err(LoginError::Unavailable(ApiError::Server(503)))
        );
        let err = flow.submit("admin", "pw").await.unwrap_err();
        assert!(matches!(err, LoginError::Unavailable(ApiError::Network(_))));
        assert_ne!(err.to_string(), LoginError::InvalidCredentials.to_string());
        assert_eq!(store.get(), Session::default());
    }

    #[tokio::test]
    async fn test_missing_fields_skip_network() {
        let http = ScriptedHttp::new();
        let store = MemorySessionStore::default();
        let flow = LoginFlow::new(&http, &store);

        assert_eq!(flow.submit("  ", "pw").await, Err(LoginError::MissingFields));
        assert_eq!(flow.submit("admin", "").await, Err(LoginError::MissingFields));
        assert!(http.requests().is_empty());
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target(None), "/admin");
        assert_eq!(redirect_target(Some("/admin/tattoos")), "/admin/tattoos");
        assert_eq!(redirect_target(Some("/tattoos")), "/admin");
        assert_eq!(redirect_target(Some("https://evil.example")), "/admin");
        assert_eq!(redirect_target(Some("/admin//evil.example")), "/admin");
    }

    #[test]
    fn test_logout_clears_store() {
        let store = MemorySessionStore::new(Session::authenticated("a".into(), None));
        logout(&store);
        assert_eq!(store.get(), Session::default());
    }
}
