//! Git author/committer identity.
//!
//! A [`GitActor`] is the validated form of the `name <email> epoch offset`
//! line Git stores for authors and committers. Name and email are
//! normalized at construction; the timestamp keeps its original UTC offset
//! so the actor line round-trips bit-exact with real Git data.

#[cfg(test)]
mod tests;

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::limits::NAME_MAX_LENGTH;
use crate::primitives::validate_email;

/// A validated Git identity: who acted, as which address, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitActor {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl GitActor {
    /// Validates and constructs an actor.
    ///
    /// The name is trimmed; the email is trimmed and lowercased. The
    /// timestamp is timezone-aware by type — raw strings must go through
    /// [`crate::primitives::validate_timestamp`] first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for a blank name,
    /// [`ValidationError::FieldTooLong`] for a name over 255 characters,
    /// and propagates email validation failures.
    pub fn new(
        name: &str,
        email: &str,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Self, ValidationError> {
        const FIELD: &str = "name";

        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: FIELD });
        }
        let length = name.chars().count();
        if length > NAME_MAX_LENGTH {
            return Err(ValidationError::FieldTooLong {
                field: FIELD,
                limit: NAME_MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self {
            name: name.to_string(),
            email: validate_email(email)?,
            timestamp,
        })
    }

    /// Parses a canonical Git actor line, the inverse of
    /// [`to_git_format`](Self::to_git_format).
    ///
    /// Name and email pass through the same normalization as [`new`](Self::new),
    /// so parsing a rendered actor yields field-for-field equality.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedActorLine`] when the line does
    /// not match `"name <email> epoch ±HHMM"`, and propagates name/email
    /// validation failures.
    pub fn parse_git_format(line: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedActorLine {
            value: line.to_string(),
        };

        let open = line.find('<').ok_or_else(malformed)?;
        let close = line.rfind('>').filter(|&i| i > open).ok_or_else(malformed)?;

        let name = &line[..open];
        let email = &line[open + 1..close];

        let mut rest = line[close + 1..].split_whitespace();
        let epoch = rest
            .next()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(malformed)?;
        let offset = rest.next().and_then(parse_utc_offset).ok_or_else(malformed)?;
        if rest.next().is_some() {
            return Err(malformed());
        }

        let timestamp = DateTime::from_timestamp(epoch, 0)
            .ok_or_else(malformed)?
            .with_timezone(&offset);

        Self::new(name, email, timestamp)
    }

    /// Returns the actor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the actor's normalized email identifier.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns when the actor acted, with its original UTC offset.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Renders the canonical Git actor line:
    /// `"{name} <{email}> {epoch_seconds} {±HHMM}"`.
    ///
    /// This must stay bit-exact with the actor lines in raw commit
    /// objects — it is the round-trip contract with real Git data.
    #[must_use]
    pub fn to_git_format(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }
}

/// Parses a `±HHMM` UTC offset.
fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, digits) = match raw.as_bytes() {
        [b'+', rest @ ..] => (1, rest),
        [b'-', rest @ ..] => (-1, rest),
        _ => return None,
    };
    if digits.len() != 4 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let hours = i32::from(digits[0] - b'0') * 10 + i32::from(digits[1] - b'0');
    let minutes = i32::from(digits[2] - b'0') * 10 + i32::from(digits[3] - b'0');
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl fmt::Display for GitActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_git_format())
    }
}

impl<'de> Deserialize<'de> for GitActor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawActor {
            name: String,
            email: String,
            timestamp: DateTime<FixedOffset>,
        }

        let raw = RawActor::deserialize(deserializer)?;
        Self::new(&raw.name, &raw.email, raw.timestamp).map_err(serde::de::Error::custom)
    }
}
