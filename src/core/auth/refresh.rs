use serde::{Deserialize, Serialize};

use super::REFRESH_PATH;
use crate::core::error::ApiError;
use crate::core::http::{ApiRequest, HttpClient};

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Tokens returned by a successful refresh
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshedTokens {
    #[serde(alias = "access_token")]
    pub access: String,
    /// Present when the backend rotates refresh tokens
    #[serde(default, alias = "refresh_token")]
    pub refresh: Option<String>,
}

/// Exchanges a refresh token for a new access token
#[derive(Debug, Clone)]
pub struct TokenRefreshClient<H> {
    http: H,
}

impl<H: HttpClient> TokenRefreshClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Request a new access token.
    ///
    /// A rejected refresh token is reported as [`ApiError::SessionExpired`];
    /// transport failures keep their own kind.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, ApiError> {
        let request = ApiRequest::post(REFRESH_PATH).json(&RefreshRequest {
            refresh: refresh_token,
        })?;

        let response = self.http.send(request).await?;
        match response.status {
            400 | 401 | 403 => {
                tracing::debug!(status = response.status, "refresh token rejected");
                Err(ApiError::SessionExpired)
            }
            _ => {
                let tokens: RefreshedTokens = response.into_result()?.json()?;
                if tokens.access.is_empty() {
                    return Err(ApiError::Decode("empty access token".to_string()));
                }
                Ok(tokens)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::{Body, Method};
    use crate::core::test_support::ScriptedHttp;
    use serde_json::json;

    #[tokio::test]
    async fn test_refresh_success() {
        let http = ScriptedHttp::new().reply_json(200, json!({ "access": "new-access" }));
        let client = TokenRefreshClient::new(&http);

        let tokens = client.refresh("refresh-1").await.unwrap();
        assert_eq!(tokens.access, "new-access");
        assert_eq!(tokens.refresh, None);

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, REFRESH_PATH);
        assert_eq!(requests[0].body, Body::Json(json!({ "refresh": "refresh-1" })));
        assert_eq!(requests[0].bearer, None);
    }

    #[tokio::test]
    async fn test_refresh_with_rotation_and_aliases() {
        let http = ScriptedHttp::new().reply_json(
            200,
            json!({ "access_token": "a2", "refresh_token": "r2" }),
        );
        let tokens = TokenRefreshClient::new(&http).refresh("r1").await.unwrap();
        assert_eq!(tokens.access, "a2");
        assert_eq!(tokens.refresh.as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_refresh_rejected_is_session_expired() {
        for status in [400, 401, 403] {
            let http = ScriptedHttp::new().reply(status, r#"{"detail":"Token is invalid"}"#);
            let result = TokenRefreshClient::new(&http).refresh("bad").await;
            assert_eq!(result, Err(ApiError::SessionExpired));
        }
    }

    #[tokio::test]
    async fn test_refresh_network_failure_is_not_auth() {
        let http = ScriptedHttp::new().fail(ApiError::Network("offline".into()));
        let result = TokenRefreshClient::new(&http).refresh("r").await;
        assert_eq!(result, Err(ApiError::Network("offline".into())));
    }

    #[tokio::test]
    async fn test_refresh_server_error_and_bad_body() {
        let http = ScriptedHttp::new().reply(500, "boom").reply(200, "{}");
        let client = TokenRefreshClient::new(&http);
        assert_eq!(client.refresh("r").await, Err(ApiError::Server(500)));
        assert!(matches!(client.refresh("r").await, Err(ApiError::Decode(_))));
    }
}
