//! Errors from the campaign API client.

use std::path::PathBuf;

use promo_core::error::CoreError;

use crate::session::StoreError;

/// Everything that can go wrong between the console and the campaign API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response (DNS, refused, TLS, blocked).
    #[error("network error reaching {url}: {source}")]
    Network {
        url: String,
        /// The page origin is HTTPS but the API base URL is not.
        mixed_content: bool,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with `error: true` or a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A local file to upload could not be read.
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Validation(err.message().to_string())
    }
}

impl ApiError {
    /// Text shown to the operator.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network {
                mixed_content: true,
                ..
            } => "⚠️ ERROR DE SEGURIDAD (Mixed Content): El navegador bloquea la conexión porque este sitio es HTTPS y la API es HTTP. Asegúrate de configurar la API_URL con HTTPS.".to_string(),
            ApiError::Network { url, .. } => format!(
                "⚠️ ERROR DE RED: No se pudo establecer conexión con el servidor ({url}). Verifique que el servidor tenga CORS habilitado."
            ),
            other => other.to_string(),
        }
    }

    /// Status code of a server-side failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A page served over HTTPS cannot reach a plain-HTTP API.
pub fn is_mixed_content(origin_https: bool, base_url: &str) -> bool {
    origin_https && !base_url.trim_start().to_ascii_lowercase().starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_content_needs_https_origin_and_http_api() {
        assert!(is_mixed_content(true, "http://api.example.com"));
        assert!(!is_mixed_content(true, "https://api.example.com"));
        assert!(!is_mixed_content(false, "http://localhost:7000"));
    }

    #[test]
    fn core_errors_become_validation() {
        let err: ApiError = CoreError::Forbidden("Acceso restringido a administradores".into()).into();
        assert_eq!(err.user_message(), "Acceso restringido a administradores");
        assert!(err.status().is_none());
    }

    #[test]
    fn server_message_verbatim() {
        let err = ApiError::Server {
            status: 400,
            message: "Serial ya usado".into(),
        };
        assert_eq!(err.user_message(), "Serial ya usado");
        assert_eq!(err.status(), Some(400));
    }
}
