//! Welcome route - unauthenticated connectivity check

use axum::response::IntoResponse;
use serde_json::json;

use crate::api::types::Json;

pub const WELCOME_MESSAGE: &str =
    "Bienvenue sur l’API de prédiction d’espèces aquacoles (modèle Random Forest)";

/// GET /
pub async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_welcome_returns_ok() {
        let response = welcome().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
