//! Predict endpoint handler

use axum::extract::State;
use tracing::info;
use uuid::Uuid;

use crate::api::middleware::RequireApiKey;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictRequest, PredictResponse};

/// POST /predict
///
/// Coerce the five measurements into the fixed-order feature vector, run the
/// forest, decode the class index. A decode miss means the classifier and
/// decoder artifacts disagree; that is reported as a 500, never a crash.
pub async fn predict_species(
    State(state): State<AppState>,
    _: RequireApiKey,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let features = request.into_features()?;
    let predicted_class_index = state.artifacts.classify(&features);
    let predicted_species = state.artifacts.decode(predicted_class_index)?.to_string();

    info!(
        request_id = %request_id,
        class_index = predicted_class_index,
        species = %predicted_species,
        "Prediction served"
    );

    Ok(Json(PredictResponse {
        predicted_class_index,
        predicted_species,
    }))
}
