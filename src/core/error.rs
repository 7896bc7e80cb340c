//! Error taxonomy for calls against the shop backend.

/// Failure of a backend call, classified by what the caller can do about it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the credential (401/403)
    #[error("Unauthorized")]
    Unauthorized,

    /// Authentication failed and could not be recovered by a refresh
    #[error("Session expired")]
    SessionExpired,

    /// The backend rejected the submitted data (400/422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The addressed item does not exist (404)
    #[error("Not found")]
    NotFound,

    /// Any other non-success status
    #[error("Server error (status {0})")]
    Server(u16),

    /// The response body could not be read or decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status. `detail` is the response body text.
    pub fn from_status(status: u16, detail: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            400 | 422 => ApiError::Validation(detail.trim().to_string()),
            404 => ApiError::NotFound,
            _ => ApiError::Server(status),
        }
    }

    /// Localized text shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "No se pudo conectar con el servidor",
            ApiError::Unauthorized | ApiError::SessionExpired => {
                "Tu sesión ha expirado. Inicia sesión de nuevo"
            }
            ApiError::Validation(_) => "Los datos enviados no son válidos",
            ApiError::NotFound => "El elemento ya no existe",
            ApiError::Server(_) => "El servidor respondió con un error",
            ApiError::Decode(_) => "Respuesta inesperada del servidor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_auth_failures() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_from_status_keeps_validation_detail() {
        let err = ApiError::from_status(400, " {\"price\":[\"required\"]}\n");
        assert_eq!(
            err,
            ApiError::Validation("{\"price\":[\"required\"]}".to_string())
        );
        assert!(matches!(
            ApiError::from_status(422, ""),
            ApiError::Validation(_)
        ));
    }

    #[test]
    fn test_from_status_not_found_and_server() {
        assert_eq!(ApiError::from_status(404, "gone"), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500, ""), ApiError::Server(500));
        assert_eq!(ApiError::from_status(502, ""), ApiError::Server(502));
    }

    #[test]
    fn test_user_messages_are_distinct_per_kind() {
        let network = ApiError::Network("x".into()).user_message();
        let auth = ApiError::SessionExpired.user_message();
        let invalid = ApiError::Validation("x".into()).user_message();
        assert_ne!(network, auth);
        assert_ne!(auth, invalid);
        assert_eq!(
            ApiError::Unauthorized.user_message(),
            ApiError::SessionExpired.user_message()
        );
    }
}
