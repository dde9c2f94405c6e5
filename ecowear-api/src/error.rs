use serde::{Deserialize, Serialize};

/// Public API error response format.
///
/// `error` is a human readable message that clients may display verbatim,
/// `type` is a stable snake_case code.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Points required by the rejected operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<u64>,
    /// Points available when the operation was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_balance(mut self, required: u64, current: u64) -> Self {
        self.required = Some(required);
        self.current = Some(current);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted() {
        let body = ErrorResponse::new("Offer not found", "not_found");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "error": "Offer not found", "type": "not_found" })
        );
    }

    #[test]
    fn balance_fields_are_serialized() {
        let body = ErrorResponse::new("Insufficient points", "insufficient_points")
            .with_balance(500, 120);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["required"], 500);
        assert_eq!(json["current"], 120);
        assert!(json.get("suggestion").is_none());
    }
}
