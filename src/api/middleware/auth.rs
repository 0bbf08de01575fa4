//! Shared-secret authentication for the predict route

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::api_key::verify_api_key;

/// Header carrying the credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that rejects requests without a valid `X-API-Key` header.
///
/// Runs before the body is read, so a wrong key is 401 regardless of whether
/// the payload would have validated.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .ok_or_else(ApiError::unauthorized)?;

        if !verify_api_key(presented, &state.api_key) {
            debug!("Rejected predict request with a wrong API key");
            return Err(ApiError::unauthorized());
        }

        Ok(RequireApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::{Request, StatusCode};

    use crate::domain::{FeatureVector, LabelDecoder, SpeciesClassifier};
    use crate::infrastructure::artifacts::ArtifactStore;

    struct NullClassifier;

    impl SpeciesClassifier for NullClassifier {
        fn classify(&self, _features: &FeatureVector) -> usize {
            0
        }
    }

    fn state() -> AppState {
        let store = ArtifactStore::from_parts(
            Arc::new(NullClassifier),
            LabelDecoder::new(vec!["tilapia".to_string()]),
        );
        AppState::new(Arc::new(store), "sk-expected".to_string())
    }

    async fn extract(request: Request<()>) -> Result<RequireApiKey, ApiError> {
        let (mut parts, _) = request.into_parts();
        RequireApiKey::from_request_parts(&mut parts, &state()).await
    }

    #[tokio::test]
    async fn test_valid_key_passes() {
        let request = Request::builder()
            .header("x-api-key", "sk-expected")
            .body(())
            .unwrap();

        assert!(extract(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let request = Request::builder()
            .header("x-api-key", "  sk-expected  ")
            .body(())
            .unwrap();

        assert!(extract(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_key_is_unauthorized() {
        let request = Request::builder()
            .header("x-api-key", "sk-wrong")
            .body(())
            .unwrap();

        let error = extract(request).await.unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_key_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();

        let error = extract(request).await.unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    }
}
