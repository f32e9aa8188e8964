//! Error types for domain model validation.

use thiserror::Error;

use crate::change::ChangeType;
use crate::diff::ChangeKind;

/// Errors raised when constructing a domain value from untrusted input.
///
/// Every variant names the offending field and, where safe to echo back,
/// the rejected value. Validation failure always means "do not construct
/// this value" — callers decide whether to skip the record, abort the
/// import, or report a partial failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The SHA is empty, contains a non-hex character, or has an invalid
    /// length.
    #[error("invalid SHA for {field}: {reason} (got {value:?})")]
    InvalidShaFormat {
        /// The field holding the SHA.
        field: &'static str,
        /// Why the SHA was rejected.
        reason: String,
        /// The rejected input, after trimming.
        value: String,
    },

    /// A signature was provided but trims to nothing.
    #[error("signature for {field} is empty after trimming")]
    EmptySignature {
        /// The field holding the signature.
        field: &'static str,
    },

    /// The signature lacks a recognized prefix.
    #[error("signature for {field} must start with '-----BEGIN' or 'gpgsig ' (got {value:?})")]
    InvalidSignatureFormat {
        /// The field holding the signature.
        field: &'static str,
        /// The rejected input, after trimming.
        value: String,
    },

    /// The raw timestamp carries no UTC offset.
    ///
    /// Naive timestamps are never silently assumed to be UTC; attaching an
    /// offset is an explicit upstream decision.
    #[error("timestamp for {field} has no UTC offset (got {value:?})")]
    NaiveTimestamp {
        /// The field holding the timestamp.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The raw timestamp could not be parsed at all.
    #[error("invalid timestamp for {field}: {reason} (got {value:?})")]
    InvalidTimestamp {
        /// The field holding the timestamp.
        field: &'static str,
        /// Why parsing failed.
        reason: String,
        /// The rejected input.
        value: String,
    },

    /// A required text field is empty or whitespace-only.
    #[error("{field} cannot be empty or whitespace-only")]
    EmptyField {
        /// The empty field.
        field: &'static str,
    },

    /// A text field exceeds its length bound.
    #[error("{field} exceeds {limit} characters (got {actual})")]
    FieldTooLong {
        /// The oversized field.
        field: &'static str,
        /// The maximum accepted length.
        limit: usize,
        /// The rejected length.
        actual: usize,
    },

    /// A file path contains a forbidden byte.
    #[error("invalid path for {field}: {reason} (got {value:?})")]
    InvalidPath {
        /// The field holding the path.
        field: &'static str,
        /// Why the path was rejected.
        reason: String,
        /// The rejected input, after trimming.
        value: String,
    },

    /// A renamed or copied modification is missing its old path.
    #[error("{kind} modification requires old_path")]
    MissingOldPath {
        /// The modification kind that requires an old path.
        kind: ChangeKind,
    },

    /// A modification kind that forbids an old path was given one.
    #[error("{kind} modification cannot have old_path")]
    UnexpectedOldPath {
        /// The modification kind that forbids an old path.
        kind: ChangeKind,
    },

    /// A rename or copy maps a path onto itself.
    #[error("old_path and path must differ (got {path:?})")]
    SamePath {
        /// The duplicated path.
        path: String,
    },

    /// An actor line does not match `"name <email> epoch offset"`.
    #[error("malformed git actor line (got {value:?})")]
    MalformedActorLine {
        /// The rejected line.
        value: String,
    },

    /// Unrecognized file modification kind string.
    #[error("unknown change kind: {value:?}")]
    UnknownChangeKind {
        /// The rejected input.
        value: String,
    },

    /// Unrecognized change type string.
    #[error("unknown change type: {value:?}")]
    UnknownChangeType {
        /// The rejected input.
        value: String,
    },

    /// The number of source branches violates the change type's rule.
    #[error("{change_type} change requires {expected} source branches (got {actual})")]
    SourceBranchCount {
        /// The change type whose rule was violated.
        change_type: ChangeType,
        /// Human-readable expectation, e.g. "exactly 1" or "at least 2".
        expected: &'static str,
        /// The rejected branch count.
        actual: usize,
    },
}
