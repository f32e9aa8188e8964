//! Git domain model and validation layer for release note generation.
//!
//! This crate is the foundation of the Commit -> Change -> Release
//! pipeline: immutable value types representing Git history facts, plus the
//! validation rules that guarantee those facts are well-formed before any
//! downstream stage (grouping, summarization, rendering) consumes them.
//!
//! # Architecture
//!
//! ```text
//! raw git data --> primitives (GitSha, GpgSignature, email, timestamp)
//!                      |
//!                      v
//!        GitActor   FileModification --> Diff
//!              \        |
//!               v       v
//!             GitMetadata --> Commit --> [grouping stage] --> ChangeMetadata
//! ```
//!
//! # Key Concepts
//!
//! - **Smart constructors**: every type validates at construction; an
//!   invalid value can never be observed to exist.
//! - **Immutability**: fields are private with accessor methods only; any
//!   "change" builds a new value.
//! - **Pure gate**: no I/O, no logging, no retries — validation errors
//!   propagate to the caller, which decides whether to skip the record,
//!   abort the import, or report a partial failure.
//!
//! # Example
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use relnote_core::{Commit, Diff, FileModification, GitActor, GitMetadata};
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let timestamp = utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
//!
//! let author = GitActor::new("John Doe", "JOHN@EXAMPLE.COM", timestamp)?;
//! let metadata = GitMetadata::new("abc12345def67890", &[], &["main"], None)?;
//! let diff = Diff::new(vec![FileModification::added("src/lib.rs", 42)?]);
//!
//! let commit = Commit::new(metadata, author.clone(), author, "Add the parser", diff)?;
//! assert!(commit.is_root_commit());
//! assert_eq!(commit.author().to_git_format(),
//!            "John Doe <john@example.com> 1672574400 +0000");
//! # Ok::<(), relnote_core::ValidationError>(())
//! ```

pub mod actor;
pub mod change;
pub mod commit;
pub mod diff;
pub mod error;
pub mod limits;
pub mod metadata;
pub mod primitives;

pub use actor::GitActor;
pub use change::{ChangeMetadata, ChangeType};
pub use commit::Commit;
pub use diff::{ChangeKind, Diff, FileModification};
pub use error::ValidationError;
pub use metadata::GitMetadata;
pub use primitives::{GitSha, GpgSignature, validate_email, validate_timestamp};
