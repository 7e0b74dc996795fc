//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use libdesk_core::types::roll_number::ROLL_NUMBER_REQUIRED;

/// Body of `POST /api/login` and `POST /api/logout`.
///
/// `roll_no` may arrive as a string or a number; anything else reads as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RollNoRequest {
    /// Student roll number.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "not_blank"))]
    pub roll_no: String,
}

impl RollNoRequest {
    /// Parse a raw body, treating an empty or malformed body as an empty roll number.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(ROLL_NUMBER_REQUIRED.into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_roll_no() {
        let req = RollNoRequest::from_body(br#"{"roll_no": " 7 "}"#);
        assert_eq!(req.roll_no, " 7 ");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_numeric_roll_no() {
        let req = RollNoRequest::from_body(br#"{"roll_no": 7}"#);
        assert_eq!(req.roll_no, "7");
    }

    #[test]
    fn test_missing_or_malformed_is_empty() {
        for body in [
            &b""[..],
            &b"not json"[..],
            &b"{}"[..],
            &br#"{"roll_no": null}"#[..],
            &br#"{"roll_no": ["1"]}"#[..],
            &br#"{"roll_no": "   "}"#[..],
        ] {
            let req = RollNoRequest::from_body(body);
            assert!(req.validate().is_err(), "body {:?} should be rejected", body);
        }
    }
}
