//! GPG signature block validation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A validated GPG signature block from a signed Git object.
///
/// Holds either Git's `gpgsig` header form or a standard PGP signature
/// block. The text is trimmed but otherwise preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GpgSignature(String);

impl GpgSignature {
    /// Validates a raw signature block.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySignature`] if the input trims to
    /// nothing, or [`ValidationError::InvalidSignatureFormat`] if it does
    /// not start with `-----BEGIN` or `gpgsig `.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        const FIELD: &str = "signature";

        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptySignature { field: FIELD });
        }
        if !value.starts_with("-----BEGIN") && !value.starts_with("gpgsig ") {
            return Err(ValidationError::InvalidSignatureFormat {
                field: FIELD,
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Validates an optional signature, passing `None` through unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`GpgSignature::new`] failures for present input.
    pub fn from_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        raw.map(Self::new).transpose()
    }

    /// Returns the signature text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GpgSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GpgSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for GpgSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GpgSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}
