//! Fixed-order feature vector and per-field coercion

use serde_json::Value;

use super::error::DomainError;

/// Number of measurements the classifier was trained on.
pub const FEATURE_COUNT: usize = 5;

/// Ordered water-quality measurements.
///
/// The field order is a contract with the trained artifact: temperature, pH,
/// ammonia, dissolved oxygen, salinity. Reordering silently corrupts
/// predictions. All values are finite; coercion rejects NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub temperature: f64,
    pub ph: f64,
    pub nh3: f64,
    pub oxygen: f64,
    pub salinite: f64,
}

impl FeatureVector {
    /// The vector in the order the artifact was trained on.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature,
            self.ph,
            self.nh3,
            self.oxygen,
            self.salinite,
        ]
    }
}

/// Coerce one raw JSON field into a finite float.
///
/// Accepts JSON numbers and numeric-looking strings, matching the dynamic
/// schema layer this service replaces. Anything else fails with a validation
/// error naming the field. No domain-range check is applied: physically
/// implausible values (negative salinity, pH above 14) pass through to the
/// classifier unmodified.
pub fn coerce_field(field: &'static str, value: &Value) -> Result<f64, DomainError> {
    let number = match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            DomainError::validation(field, "number is outside the float range")
        })?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            DomainError::validation(field, format!("cannot coerce \"{}\" to a number", s))
        })?,
        Value::Null => {
            return Err(DomainError::validation(field, "field must not be null"));
        }
        other => {
            return Err(DomainError::validation(
                field,
                format!("expected a number, got {}", json_type_name(other)),
            ));
        }
    };

    if !number.is_finite() {
        return Err(DomainError::validation(field, "value must be a finite number"));
    }

    Ok(number)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_json_number() {
        assert_eq!(coerce_field("ph", &json!(7.2)).unwrap(), 7.2);
        assert_eq!(coerce_field("temperature", &json!(25)).unwrap(), 25.0);
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce_field("ph", &json!("7.2")).unwrap(), 7.2);
        assert_eq!(coerce_field("ph", &json!("  6.8  ")).unwrap(), 6.8);
        assert_eq!(coerce_field("nh3", &json!("-0.5")).unwrap(), -0.5);
    }

    #[test]
    fn test_reject_non_numeric_string() {
        let error = coerce_field("ph", &json!("acide")).unwrap_err();
        assert!(error.to_string().contains("ph"));
        assert!(error.to_string().contains("acide"));
    }

    #[test]
    fn test_reject_non_numeric_types() {
        assert!(coerce_field("oxygen", &json!(true)).is_err());
        assert!(coerce_field("oxygen", &json!(null)).is_err());
        assert!(coerce_field("oxygen", &json!([6.5])).is_err());
        assert!(coerce_field("oxygen", &json!({"value": 6.5})).is_err());
    }

    #[test]
    fn test_reject_non_finite_strings() {
        // "NaN" and "inf" parse as floats but are not valid measurements.
        assert!(coerce_field("salinite", &json!("NaN")).is_err());
        assert!(coerce_field("salinite", &json!("inf")).is_err());
        assert!(coerce_field("salinite", &json!("-infinity")).is_err());
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        // Deliberate permissiveness: no domain-range checks.
        assert_eq!(coerce_field("salinite", &json!(-3.0)).unwrap(), -3.0);
        assert_eq!(coerce_field("ph", &json!(22.5)).unwrap(), 22.5);
    }

    #[test]
    fn test_as_array_preserves_field_order() {
        let features = FeatureVector {
            temperature: 1.0,
            ph: 2.0,
            nh3: 3.0,
            oxygen: 4.0,
            salinite: 5.0,
        };

        assert_eq!(features.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
