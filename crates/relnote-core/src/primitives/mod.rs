//! Primitive validators for raw Git data.
//!
//! Everything downstream of the Git access layer flows through these
//! functions first: raw strings become typed, normalized primitives or the
//! construction fails with a [`ValidationError`] naming the offending
//! field. There is no retry, no fallback, and no logging here — validation
//! is a pure gate.

mod sha;
mod signature;

#[cfg(test)]
mod tests;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

pub use sha::GitSha;
pub use signature::GpgSignature;

use crate::error::ValidationError;
use crate::limits::EMAIL_MAX_LENGTH;

/// Normalizes a raw email identifier.
///
/// Trims and lowercases. Git permits non-RFC identifiers such as
/// `"build-system"`, so the only hard rules are non-empty after trimming
/// and the RFC 5321 length ceiling. Do not tighten this: strict RFC
/// validation would reject legitimate historical data.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] for blank input and
/// [`ValidationError::FieldTooLong`] over [`EMAIL_MAX_LENGTH`].
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    const FIELD: &str = "email";

    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field: FIELD });
    }
    let length = value.chars().count();
    if length > EMAIL_MAX_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field: FIELD,
            limit: EMAIL_MAX_LENGTH,
            actual: length,
        });
    }
    Ok(value)
}

/// Parses a raw timestamp string into a timezone-aware point in time.
///
/// Accepts RFC 3339 (`2023-01-01T12:00:00+00:00`) and the space-separated
/// `2023-01-01 12:00:00 +0000` form Git tooling commonly emits. Input that
/// parses as a date-time but carries no UTC offset is rejected rather than
/// assumed to be UTC — attaching an offset is the caller's decision.
///
/// # Errors
///
/// Returns [`ValidationError::NaiveTimestamp`] for offset-less input and
/// [`ValidationError::InvalidTimestamp`] for anything unparseable.
pub fn validate_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    const FIELD: &str = "timestamp";
    const AWARE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%dT%H:%M:%S%.f %z"];
    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }
    for format in AWARE_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    for format in NAIVE_FORMATS {
        if NaiveDateTime::parse_from_str(value, format).is_ok() {
            return Err(ValidationError::NaiveTimestamp {
                field: FIELD,
                value: value.to_string(),
            });
        }
    }
    Err(ValidationError::InvalidTimestamp {
        field: FIELD,
        reason: "unrecognized date-time format".to_string(),
        value: value.to_string(),
    })
}
