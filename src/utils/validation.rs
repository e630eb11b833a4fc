//! Request payload validation.
//!
//! A request body must be a JSON object with exactly two keys, `"text"` and
//! `"sentence"` (case-sensitive), both mapping to strings. Anything else is
//! rejected with a [`ValidationError`] carrying a human-readable message.

use serde_json::{Map, Value};

use crate::core::request::MatchRequest;

/// Number of keys a request payload must carry
pub const EXPECTED_KEY_COUNT: usize = 2;

/// Status code attached to every validation failure
pub const VALIDATION_STATUS_CODE: u16 = 400;

/// Message returned when a payload passes validation
pub const VALIDATION_PASSED: &str = "Request validation passed.";

/// Reasons a request payload is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The number of keys provided in the request is incorrect. keys should be \"text\" and \"sentence\" only. Both keys should correspond to string values")]
    WrongKeyCount,
    #[error("There is a key present that does not correspond to a string value . Keys should be \"text\" and \"sentence\". Both keys should correspond to string values")]
    NonStringValue,
    #[error("Missing key. Keys should be \"text\" and \"sentence\" (case-sensitive). Both keys should correspond to string values")]
    MissingKey,
    #[error("The request body must be a JSON object with the keys \"text\" and \"sentence\"")]
    NotAnObject,
    #[error("The request body is not valid JSON: {0}")]
    MalformedJson(String),
}

impl ValidationError {
    /// HTTP status code for this failure
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        VALIDATION_STATUS_CODE
    }

    /// Build the response payload: `extra` (if any) merged with a `message` key.
    ///
    /// The `message` key always wins over a `message` entry in `extra`.
    #[must_use]
    pub fn to_payload(&self, extra: Option<&Map<String, Value>>) -> Map<String, Value> {
        let mut payload = extra.cloned().unwrap_or_default();
        payload.insert("message".to_string(), Value::String(self.to_string()));
        payload
    }
}

/// Validate a decoded request payload.
///
/// Returns the message and whether the payload was rejected. Callers that
/// need the extracted fields should use [`validate_request`] instead.
///
/// # Examples
///
/// ```
/// use clause_locator::utils::validation::validate;
///
/// let payload = serde_json::json!({"text": "a b", "sentence": "a b"});
/// let (message, rejected) = validate(payload.as_object().unwrap());
/// assert!(!rejected);
/// assert_eq!(message, "Request validation passed.");
/// ```
#[must_use]
pub fn validate(payload: &Map<String, Value>) -> (String, bool) {
    match validate_request(payload) {
        Ok(_) => (VALIDATION_PASSED.to_string(), false),
        Err(e) => (e.to_string(), true),
    }
}

/// Validate a payload and extract the request fields.
///
/// Checks run in order: key count, presence of both named keys, then value
/// types. A two-key payload with a misnamed key therefore reports
/// [`ValidationError::MissingKey`] even if a value is also mistyped.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing the first failed check.
pub fn validate_request(payload: &Map<String, Value>) -> Result<MatchRequest, ValidationError> {
    if payload.len() != EXPECTED_KEY_COUNT {
        return Err(ValidationError::WrongKeyCount);
    }

    let (Some(sentence), Some(text)) = (payload.get("sentence"), payload.get("text")) else {
        return Err(ValidationError::MissingKey);
    };

    match (sentence, text) {
        (Value::String(sentence), Value::String(text)) => Ok(MatchRequest::new(text, sentence)),
        _ => Err(ValidationError::NonStringValue),
    }
}

/// Validate an arbitrary decoded JSON body, rejecting non-objects.
///
/// # Errors
///
/// Returns [`ValidationError::NotAnObject`] for arrays, scalars and `null`,
/// otherwise whatever [`validate_request`] reports.
pub fn validate_value(body: &Value) -> Result<MatchRequest, ValidationError> {
    body.as_object()
        .ok_or(ValidationError::NotAnObject)
        .and_then(validate_request)
}

/// Decode and validate a raw request body.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedJson`] if the bytes are not JSON,
/// otherwise whatever [`validate_value`] reports.
pub fn validate_body(body: &[u8]) -> Result<MatchRequest, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
    validate_value(&value)
}
