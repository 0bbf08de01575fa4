//! Uniform error envelope for every non-2xx response

use std::backtrace::Backtrace;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The only response shape for failures.
///
/// Anticipated failures carry just `detail`; unexpected faults additionally
/// echo the raw error text and a captured backtrace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// API error with status code and optional auth challenge
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub envelope: ErrorEnvelope,
    challenge: bool,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            envelope: ErrorEnvelope {
                detail: detail.into(),
                error: None,
                trace: None,
            },
            challenge: false,
        }
    }

    /// Validation failure (400); `message` should name the offending field.
    pub fn value_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Erreur de valeur : {}", message.into()),
        )
    }

    /// Credential missing or wrong: 401 with a `WWW-Authenticate: APIKey`
    /// challenge. Deliberately generic, no hint about the configured secret.
    pub fn unauthorized() -> Self {
        let mut error = Self::new(StatusCode::UNAUTHORIZED, "Clé API invalide ou manquante");
        error.challenge = true;
        error
    }

    /// Anticipated internal failure (500) with a precise message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Erreur interne : {}", message.into()),
        )
    }

    /// Catch-all for unanticipated faults: generic detail plus the raw error
    /// text and a backtrace. Acceptable while the deployment is young;
    /// flagged as an information-disclosure trade-off before production
    /// hardening.
    pub fn unexpected(error: impl std::fmt::Display) -> Self {
        let mut unexpected = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Erreur interne du serveur");
        unexpected.envelope.error = Some(error.to_string());
        unexpected.envelope.trace = Some(Backtrace::force_capture().to_string());
        unexpected
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let challenge = self.challenge;
        let mut response = (self.status, Json(self.envelope)).into_response();

        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("APIKey"));
        }

        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => {
                Self::value_error(format!("{field}: {message}"))
            }
            DomainError::Credential => Self::unauthorized(),
            DomainError::Inference { message } => Self::internal(message),
            DomainError::Internal { .. } => Self::unexpected(err),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.envelope.detail)
    }
}

impl std::error::Error for ApiError {}
