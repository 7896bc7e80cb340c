use super::refresh::TokenRefreshClient;
use crate::core::error::ApiError;
use crate::core::http::{ApiRequest, ApiResponse, HttpClient};
use crate::core::session::SessionStore;

/// Sends requests with the stored bearer token.
///
/// A 401 triggers at most one refresh followed by one retry of the original
/// request. When the credential cannot be recovered the session is cleared
/// and the call fails with [`ApiError::SessionExpired`].
#[derive(Debug, Clone)]
pub struct AuthorizedClient<H, S> {
    http: H,
    store: S,
}

impl<H: HttpClient, S: SessionStore> AuthorizedClient<H, S> {
    pub fn new(http: H, store: S) -> Self {
        Self { http, store }
    }

    /// Send `request` with authorization. Non-success statuses are mapped
    /// to [`ApiError`].
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let session = self.store.get();
        let Some(access_token) = session.access_token.filter(|t| !t.is_empty()) else {
            return Err(ApiError::SessionExpired);
        };

        let response = self
            .http
            .send(request.clone().bearer(&access_token))
            .await?;
        if !response.is_unauthorized() {
            return response.into_result();
        }

        let Some(refresh_token) = session.refresh_token else {
            tracing::debug!(path = %request.path, "access token rejected, no refresh token");
            self.store.clear();
            return Err(ApiError::SessionExpired);
        };

        tracing::debug!(path = %request.path, "access token rejected, refreshing");
        let tokens = match TokenRefreshClient::new(&self.http)
            .refresh(&refresh_token)
            .await
        {
            Ok(tokens) => tokens,
            Err(ApiError::SessionExpired) => {
                self.store.clear();
                return Err(ApiError::SessionExpired);
            }
            Err(e) => return Err(e),
        };

        self.store
            .update_access_token(tokens.access.clone(), tokens.refresh);

        let retried = self.http.send(request.bearer(&tokens.access)).await?;
        if retried.is_unauthorized() {
            tracing::warn!("request still unauthorized after refresh, clearing session");
            self.store.clear();
            return Err(ApiError::SessionExpired);
        }
        retried.into_result()
    }
}
