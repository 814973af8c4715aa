//! Presence-only validation of request bodies before typed decoding.

use crate::error::AppError;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Check that every key in `required` is present and non-null in `body`.
    /// All absent keys are reported in a single error, before any decoding
    /// or persistence attempt.
    pub fn require(body: &Value, required: &[&str]) -> Result<(), AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))?;
        let missing: Vec<String> = required
            .iter()
            .filter(|k| matches!(obj.get(**k), None | Some(Value::Null)))
            .map(|k| k.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingFields(missing))
        }
    }

    /// Decode a validated body into its typed payload. Type mismatches
    /// (e.g. a string where a number is expected) become bad requests.
    pub fn decode<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, AppError> {
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;
    use serde_json::json;

    #[test]
    fn all_fields_present_passes() {
        let body = json!({"name": "Widget", "description": "x", "price": 1.5, "qty": 2});
        assert!(RequestValidator::require(&body, NewProduct::REQUIRED).is_ok());
    }

    #[test]
    fn missing_fields_are_aggregated() {
        let body = json!({"name": "Widget", "qty": 2});
        let err = RequestValidator::require(&body, NewProduct::REQUIRED).unwrap_err();
        match err {
            AppError::MissingFields(fields) => {
                assert_eq!(fields, vec!["description".to_string(), "price".to_string()]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn explicit_null_counts_as_missing() {
        let body = json!({"name": null, "description": "x", "price": 1.5, "qty": 2});
        let err = RequestValidator::require(&body, NewProduct::REQUIRED).unwrap_err();
        match err {
            AppError::MissingFields(fields) => assert_eq!(fields, vec!["name".to_string()]),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = RequestValidator::require(&json!([1, 2]), NewProduct::REQUIRED).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn decode_rejects_wrong_types() {
        let body = json!({"name": "Widget", "description": "x", "price": "cheap", "qty": 2});
        let res: Result<NewProduct, _> = RequestValidator::decode(body);
        assert!(matches!(res, Err(AppError::BadRequest(_))));
    }
}
