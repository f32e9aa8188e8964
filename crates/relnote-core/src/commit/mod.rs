//! The commit record: one immutable unit of Git history.
//!
//! A [`Commit`] composes structural metadata, authorship, message, and diff
//! into the value the grouping stage consumes. Its sub-objects are valid by
//! type — an invalid [`GitMetadata`], [`GitActor`], or [`Diff`] cannot
//! exist — so commit construction only has to validate the message.


use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::actor::GitActor;
use crate::diff::Diff;
use crate::error::ValidationError;
use crate::metadata::GitMetadata;

/// Width of the summary preview in the compact display form.
const SUMMARY_PREVIEW_CHARS: usize = 50;

/// A single validated Git commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    metadata: GitMetadata,
    author: GitActor,
    committer: GitActor,
    message: String,
    diff: Diff,
    ai_summary: Option<String>,
}

impl Commit {
    /// Composes a commit from already-validated parts.
    ///
    /// The message is trimmed and must be non-empty; its first line is the
    /// summary. A summary under ~100 characters is recommended but not
    /// enforced. `ai_summary` always starts absent — it is a slot for the
    /// downstream summarization stage, never populated here.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for a blank message.
    pub fn new(
        metadata: GitMetadata,
        author: GitActor,
        committer: GitActor,
        message: &str,
        diff: Diff,
    ) -> Result<Self, ValidationError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyField { field: "message" });
        }

        Ok(Self {
            metadata,
            author,
            committer,
            message: message.to_string(),
            diff,
            ai_summary: None,
        })
    }

    /// Returns a new commit carrying the given AI-generated summary.
    ///
    /// Whitespace-only text collapses to absent. The original commit is
    /// untouched — all "mutation" is construction of a new value.
    #[must_use]
    pub fn with_ai_summary(self, summary: &str) -> Self {
        let summary = summary.trim();
        Self {
            ai_summary: (!summary.is_empty()).then(|| summary.to_string()),
            ..self
        }
    }

    /// Returns the structural metadata.
    #[must_use]
    pub const fn metadata(&self) -> &GitMetadata {
        &self.metadata
    }

    /// Returns who wrote the change.
    #[must_use]
    pub const fn author(&self) -> &GitActor {
        &self.author
    }

    /// Returns who recorded the change.
    #[must_use]
    pub const fn committer(&self) -> &GitActor {
        &self.committer
    }

    /// Returns the full commit message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the first line of the message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Returns the per-file changes.
    #[must_use]
    pub const fn diff(&self) -> &Diff {
        &self.diff
    }

    /// Returns the AI-generated summary, when one has been attached.
    #[must_use]
    pub fn ai_summary(&self) -> Option<&str> {
        self.ai_summary.as_deref()
    }

    /// True when an AI-generated summary is attached.
    #[must_use]
    pub const fn has_ai_summary(&self) -> bool {
        self.ai_summary.is_some()
    }

    /// Returns the default abbreviation of the commit id.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.metadata.sha().short()
    }

    /// True for the first commit in a history.
    #[must_use]
    pub fn is_root_commit(&self) -> bool {
        self.metadata.is_root_commit()
    }

    /// True for a merge commit.
    #[must_use]
    pub fn is_merge_commit(&self) -> bool {
        self.metadata.is_merge_commit()
    }

    /// Returns the total line churn of the diff.
    #[must_use]
    pub const fn total_changes(&self) -> u64 {
        self.diff.total_changes()
    }

    /// Returns every path this commit touches, sorted and deduplicated.
    #[must_use]
    pub fn affected_paths(&self) -> Vec<String> {
        self.diff.affected_paths()
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        let preview: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        let ellipsis = if summary.chars().count() > SUMMARY_PREVIEW_CHARS {
            "..."
        } else {
            ""
        };

        let files = self.diff.total_files();
        let files_word = if files == 1 { "file" } else { "files" };
        let ai = if self.has_ai_summary() { " [AI]" } else { "" };

        write!(
            f,
            "{} {preview}{ellipsis} ({files} {files_word}){ai}",
            self.short_sha()
        )
    }
}

impl<'de> Deserialize<'de> for Commit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawCommit {
            metadata: GitMetadata,
            author: GitActor,
            committer: GitActor,
            message: String,
            diff: Diff,
            #[serde(default)]
            ai_summary: Option<String>,
        }

        let raw = RawCommit::deserialize(deserializer)?;
        let commit = Self::new(raw.metadata, raw.author, raw.committer, &raw.message, raw.diff)
            .map_err(serde::de::Error::custom)?;
        Ok(match raw.ai_summary {
            Some(summary) => commit.with_ai_summary(&summary),
            None => commit,
        })
    }
}
