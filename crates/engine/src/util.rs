//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation and mapping logic so every write path enforces the same rules.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Parse a UUID from storage and return a labeled error on failure.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::KeyNotFound(format!("{label} not exists")))
}

/// Trim a required title, rejecting blank values with the given error kind.
pub(crate) fn normalize_required_title(
    value: &str,
    invalid: fn(String) -> EngineError,
) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("title must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}
