//! Git object id validation and normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::limits::{SHA_MAX_LENGTH, SHA_MIN_LENGTH};

/// A validated, lowercase-normalized Git object id.
///
/// Accepts anything from a 4-character abbreviation through a full
/// 64-character SHA-256 id. After construction every character is one of
/// `0-9a-f`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GitSha(String);

impl GitSha {
    /// Abbreviation width used by compact display forms.
    pub const DISPLAY_ABBREV: usize = 8;

    /// Validates and normalizes a raw SHA string.
    ///
    /// The input is trimmed and lowercased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidShaFormat`] if the trimmed input is
    /// empty, its length falls outside 4..=64, or it contains a non-hex
    /// character.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse("sha", raw)
    }

    /// Validates a raw SHA on behalf of a named field.
    ///
    /// Composite types route their SHA-bearing fields through this so the
    /// error names the field that actually failed (`parents`, `merge_base`).
    pub(crate) fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim().to_lowercase();
        let length = value.chars().count();

        if !(SHA_MIN_LENGTH..=SHA_MAX_LENGTH).contains(&length) {
            return Err(ValidationError::InvalidShaFormat {
                field,
                reason: format!(
                    "must be {SHA_MIN_LENGTH}-{SHA_MAX_LENGTH} characters long, got {length}"
                ),
                value,
            });
        }

        if !value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(ValidationError::InvalidShaFormat {
                field,
                reason: "must contain only hexadecimal characters".to_string(),
                value,
            });
        }

        Ok(Self(value))
    }

    /// Returns the normalized SHA string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of hex characters in this id.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: empty SHAs cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first `length` characters, clamped to the full id.
    #[must_use]
    pub fn abbrev(&self, length: usize) -> &str {
        &self.0[..length.min(self.0.len())]
    }

    /// Returns the default 8-character abbreviation.
    #[must_use]
    pub fn short(&self) -> &str {
        self.abbrev(Self::DISPLAY_ABBREV)
    }
}

impl fmt::Display for GitSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GitSha {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for GitSha {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for GitSha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GitSha {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}
