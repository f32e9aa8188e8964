//! Validation limit constants.
//!
//! Bounds on raw Git data accepted by the validating constructors. The SHA
//! range spans Git's minimum unambiguous abbreviation (4) through a full
//! SHA-256 object id (64).

/// Minimum accepted SHA length (short form).
pub const SHA_MIN_LENGTH: usize = 4;

/// Maximum accepted SHA length (SHA-256 object id).
pub const SHA_MAX_LENGTH: usize = 64;

/// Maximum length of an actor name.
pub const NAME_MAX_LENGTH: usize = 255;

/// Maximum length of an actor email identifier.
///
/// The RFC 5321 ceiling. Content below this bound is deliberately lax:
/// real Git history carries identifiers like `"build-system"`.
pub const EMAIL_MAX_LENGTH: usize = 320;

/// Maximum length of a per-file path.
pub const PATH_MAX_LENGTH: usize = 4096;

/// Maximum length of a branch, tag, or other ref name.
pub const BRANCH_NAME_MAX_LENGTH: usize = 255;
