//! Validation and normalization rules for event ingestion.
//!
//! Event names and user identifiers are trimmed before storage; an empty
//! result rejects the submission. Properties are restricted to a flat map
//! of primitive JSON values so the event store never accumulates nested
//! payloads it cannot aggregate over.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted length (after trimming) for `event_name` and `user_id`.
pub const MAX_FIELD_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Field normalization
// ---------------------------------------------------------------------------

/// Trim and validate an event name.
pub fn normalize_event_name(raw: &str) -> Result<String, CoreError> {
    normalize_field(raw, "event_name")
}

/// Trim and validate a pseudo-anonymous user identifier.
///
/// The identifier is opaque: no format is enforced beyond non-emptiness
/// and the length cap. Comparison elsewhere is exact and case-sensitive.
pub fn normalize_user_id(raw: &str) -> Result<String, CoreError> {
    normalize_field(raw, "user_id")
}

fn normalize_field(raw: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.len() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_FIELD_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Properties validation
// ---------------------------------------------------------------------------

/// Validate an optional event properties payload.
///
/// Accepts a JSON object whose values are all primitives (string, number,
/// boolean, or null). Arrays, nested objects, and non-object top-level
/// values are rejected.
pub fn validate_properties(properties: &serde_json::Value) -> Result<(), CoreError> {
    let map = properties.as_object().ok_or_else(|| {
        CoreError::Validation("properties must be a JSON object".to_string())
    })?;

    for (key, value) in map {
        if value.is_object() || value.is_array() {
            return Err(CoreError::Validation(format!(
                "property '{key}' must be a primitive value"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
