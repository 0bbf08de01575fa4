//! Predict endpoint wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, FeatureVector, coerce_field};

/// Raw predict request body.
///
/// Fields deserialize as raw JSON values so the coercion step can accept
/// numeric strings and report a precise per-field error, instead of leaning
/// on serde's type messages. Unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub temperature: Value,
    pub ph: Value,
    pub nh3: Value,
    pub oxygen: Value,
    pub salinite: Value,
}

impl PredictRequest {
    /// Coerce every field into the fixed-order feature vector.
    pub fn into_features(self) -> Result<FeatureVector, DomainError> {
        Ok(FeatureVector {
            temperature: coerce_field("temperature", &self.temperature)?,
            ph: coerce_field("ph", &self.ph)?,
            nh3: coerce_field("nh3", &self.nh3)?,
            oxygen: coerce_field("oxygen", &self.oxygen)?,
            salinite: coerce_field("salinite", &self.salinite)?,
        })
    }
}

/// Successful prediction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_class_index: usize,
    pub predicted_species: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> PredictRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_into_features_with_numbers() {
        let features = request(json!({
            "temperature": 25.0,
            "ph": 7.2,
            "nh3": 0.1,
            "oxygen": 6.5,
            "salinite": 15.0
        }))
        .into_features()
        .unwrap();

        assert_eq!(features.as_array(), [25.0, 7.2, 0.1, 6.5, 15.0]);
    }

    #[test]
    fn test_into_features_coerces_numeric_strings() {
        let features = request(json!({
            "temperature": "25",
            "ph": "7.2",
            "nh3": 0.1,
            "oxygen": 6.5,
            "salinite": "15.0"
        }))
        .into_features()
        .unwrap();

        assert_eq!(features.temperature, 25.0);
        assert_eq!(features.salinite, 15.0);
    }

    #[test]
    fn test_into_features_names_bad_field() {
        let error = request(json!({
            "temperature": 25.0,
            "ph": "acide",
            "nh3": 0.1,
            "oxygen": 6.5,
            "salinite": 15.0
        }))
        .into_features()
        .unwrap_err();

        assert!(error.to_string().starts_with("ph:"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let parsed: Result<PredictRequest, _> = serde_json::from_value(json!({
            "temperature": 25.0,
            "ph": 7.2,
            "nh3": 0.1,
            "oxygen": 6.5,
            "salinite": 15.0,
            "commentaire": "bassin 3"
        }));

        assert!(parsed.is_ok());
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let parsed: Result<PredictRequest, _> = serde_json::from_value(json!({
            "temperature": 25.0,
            "ph": 7.2,
            "nh3": 0.1,
            "salinite": 15.0
        }));

        let message = parsed.unwrap_err().to_string();
        assert!(message.contains("oxygen"));
    }
}
