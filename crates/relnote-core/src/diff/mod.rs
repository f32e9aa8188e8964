//! Per-file change records and commit-level diff statistics.
//!
//! A [`FileModification`] is one file's change within a commit; a [`Diff`]
//! is the ordered collection of them plus aggregate counters. The counters
//! are always derived from the entries at construction — they cannot be
//! supplied independently, so they cannot drift.


use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::limits::PATH_MAX_LENGTH;

// =============================================================================
// ChangeKind
// =============================================================================

/// How a file changed within a commit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ChangeKind {
    /// The file was created.
    Added,
    /// The file's content changed in place.
    Modified,
    /// The file was removed.
    Deleted,
    /// The file moved from another path.
    Renamed,
    /// The file was copied from another path.
    Copied,
}

impl ChangeKind {
    /// Parses a change kind from a kind name or a Git status letter.
    ///
    /// Accepts `"added"`/`"A"`, `"modified"`/`"M"`, `"deleted"`/`"D"`,
    /// `"renamed"`/`"R"`, `"copied"`/`"C"`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownChangeKind`] for anything else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "added" | "a" => Ok(Self::Added),
            "modified" | "m" => Ok(Self::Modified),
            "deleted" | "d" => Ok(Self::Deleted),
            "renamed" | "r" => Ok(Self::Renamed),
            "copied" | "c" => Ok(Self::Copied),
            _ => Err(ValidationError::UnknownChangeKind {
                value: s.to_string(),
            }),
        }
    }

    /// Returns the canonical kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
            Self::Renamed => "renamed",
            Self::Copied => "copied",
        }
    }

    /// Returns the Git status letter for this kind.
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Added => 'A',
            Self::Modified => 'M',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
            Self::Copied => 'C',
        }
    }

    /// Returns true for kinds that carry an old path.
    #[must_use]
    pub const fn is_rename_or_copy(&self) -> bool {
        matches!(self, Self::Renamed | Self::Copied)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FileModification
// =============================================================================

/// One file's change within a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileModification {
    path: String,
    kind: ChangeKind,
    old_path: Option<String>,
    lines_added: u64,
    lines_deleted: u64,
}

impl FileModification {
    /// Validates and constructs a file modification.
    ///
    /// Paths are trimmed and backslash-normalized to forward slashes.
    /// `old_path` is required for renames and copies (and must differ from
    /// `path`) and forbidden for every other kind.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`], [`ValidationError::InvalidPath`],
    /// or [`ValidationError::FieldTooLong`] for bad paths;
    /// [`ValidationError::MissingOldPath`], [`ValidationError::UnexpectedOldPath`],
    /// or [`ValidationError::SamePath`] for kind/old-path mismatches.
    pub fn new(
        path: &str,
        kind: ChangeKind,
        old_path: Option<&str>,
        lines_added: u64,
        lines_deleted: u64,
    ) -> Result<Self, ValidationError> {
        let path = normalize_path("path", path)?;
        let old_path = old_path.map(|p| normalize_path("old_path", p)).transpose()?;

        match (kind.is_rename_or_copy(), &old_path) {
            (true, None) => return Err(ValidationError::MissingOldPath { kind }),
            (false, Some(_)) => return Err(ValidationError::UnexpectedOldPath { kind }),
            (true, Some(old)) if *old == path => {
                return Err(ValidationError::SamePath { path });
            },
            _ => {},
        }

        Ok(Self {
            path,
            kind,
            old_path,
            lines_added,
            lines_deleted,
        })
    }

    /// Constructs an added-file record.
    ///
    /// # Errors
    ///
    /// Propagates path validation failures.
    pub fn added(path: &str, lines_added: u64) -> Result<Self, ValidationError> {
        Self::new(path, ChangeKind::Added, None, lines_added, 0)
    }

    /// Constructs a deleted-file record.
    ///
    /// # Errors
    ///
    /// Propagates path validation failures.
    pub fn deleted(path: &str, lines_deleted: u64) -> Result<Self, ValidationError> {
        Self::new(path, ChangeKind::Deleted, None, 0, lines_deleted)
    }

    /// Constructs an in-place modification record.
    ///
    /// # Errors
    ///
    /// Propagates path validation failures.
    pub fn modified(
        path: &str,
        lines_added: u64,
        lines_deleted: u64,
    ) -> Result<Self, ValidationError> {
        Self::new(path, ChangeKind::Modified, None, lines_added, lines_deleted)
    }

    /// Constructs a rename record.
    ///
    /// # Errors
    ///
    /// Propagates path validation failures; fails if both paths coincide.
    pub fn renamed(
        old_path: &str,
        path: &str,
        lines_added: u64,
        lines_deleted: u64,
    ) -> Result<Self, ValidationError> {
        Self::new(path, ChangeKind::Renamed, Some(old_path), lines_added, lines_deleted)
    }

    /// Constructs a copy record.
    ///
    /// # Errors
    ///
    /// Propagates path validation failures; fails if both paths coincide.
    pub fn copied(
        old_path: &str,
        path: &str,
        lines_added: u64,
        lines_deleted: u64,
    ) -> Result<Self, ValidationError> {
        Self::new(path, ChangeKind::Copied, Some(old_path), lines_added, lines_deleted)
    }

    /// Returns the file's path after the change.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns how the file changed.
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Returns the pre-rename/pre-copy path, when the kind carries one.
    #[must_use]
    pub fn old_path(&self) -> Option<&str> {
        self.old_path.as_deref()
    }

    /// Returns the number of lines added to this file.
    #[must_use]
    pub const fn lines_added(&self) -> u64 {
        self.lines_added
    }

    /// Returns the number of lines deleted from this file.
    #[must_use]
    pub const fn lines_deleted(&self) -> u64 {
        self.lines_deleted
    }

    /// Returns every path this modification touches, old path first.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        match &self.old_path {
            Some(old) => vec![old.as_str(), self.path.as_str()],
            None => vec![self.path.as_str()],
        }
    }
}

impl fmt::Display for FileModification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.letter();
        match self.kind {
            ChangeKind::Added => {
                write!(f, "{letter} {} (+{})", self.path, self.lines_added)
            },
            ChangeKind::Deleted => {
                write!(f, "{letter} {} (-{})", self.path, self.lines_deleted)
            },
            ChangeKind::Modified => write!(
                f,
                "{letter} {} (+{}/-{})",
                self.path, self.lines_added, self.lines_deleted
            ),
            ChangeKind::Renamed | ChangeKind::Copied => write!(
                f,
                "{letter} {} -> {} (+{}/-{})",
                self.old_path.as_deref().unwrap_or_default(),
                self.path,
                self.lines_added,
                self.lines_deleted
            ),
        }
    }
}

impl<'de> Deserialize<'de> for FileModification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawModification {
            path: String,
            kind: ChangeKind,
            #[serde(default)]
            old_path: Option<String>,
            lines_added: u64,
            lines_deleted: u64,
        }

        let raw = RawModification::deserialize(deserializer)?;
        Self::new(
            &raw.path,
            raw.kind,
            raw.old_path.as_deref(),
            raw.lines_added,
            raw.lines_deleted,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Trims, slash-normalizes, and bounds-checks a file path.
fn normalize_path(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let path = raw.trim().replace('\\', "/");
    if path.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if path.contains('\0') {
        return Err(ValidationError::InvalidPath {
            field,
            reason: "cannot contain null bytes".to_string(),
            value: path,
        });
    }
    let length = path.chars().count();
    if length > PATH_MAX_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field,
            limit: PATH_MAX_LENGTH,
            actual: length,
        });
    }
    Ok(path)
}

// =============================================================================
// Diff
// =============================================================================

/// The full set of file modifications for one commit, with derived totals.
///
/// Entry order is preserved. The aggregate counters are recomputed from the
/// entries at construction; there is no way to supply them independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diff {
    entries: Vec<FileModification>,
    total_files: u64,
    total_lines_added: u64,
    total_lines_deleted: u64,
}

impl Diff {
    /// Builds a diff from per-file modifications, computing the totals.
    #[must_use]
    pub fn new(entries: Vec<FileModification>) -> Self {
        let total_files = entries.len() as u64;
        let total_lines_added = entries.iter().map(FileModification::lines_added).sum();
        let total_lines_deleted = entries.iter().map(FileModification::lines_deleted).sum();
        Self {
            entries,
            total_files,
            total_lines_added,
            total_lines_deleted,
        }
    }

    /// Returns a diff with no modifications and all-zero totals.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the per-file modifications in their original order.
    #[must_use]
    pub fn entries(&self) -> &[FileModification] {
        &self.entries
    }

    /// Returns true when no files changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of files changed.
    #[must_use]
    pub const fn total_files(&self) -> u64 {
        self.total_files
    }

    /// Returns the total lines added across all files.
    #[must_use]
    pub const fn total_lines_added(&self) -> u64 {
        self.total_lines_added
    }

    /// Returns the total lines deleted across all files.
    #[must_use]
    pub const fn total_lines_deleted(&self) -> u64 {
        self.total_lines_deleted
    }

    /// Returns the total line churn (added plus deleted).
    #[must_use]
    pub const fn total_changes(&self) -> u64 {
        self.total_lines_added + self.total_lines_deleted
    }

    /// Returns the set of change kinds present in this diff.
    #[must_use]
    pub fn kinds(&self) -> BTreeSet<ChangeKind> {
        self.entries.iter().map(FileModification::kind).collect()
    }

    /// Returns the rename entries.
    #[must_use]
    pub fn renamed(&self) -> Vec<&FileModification> {
        self.entries.iter().filter(|m| m.kind() == ChangeKind::Renamed).collect()
    }

    /// Returns the copy entries.
    #[must_use]
    pub fn copied(&self) -> Vec<&FileModification> {
        self.entries.iter().filter(|m| m.kind() == ChangeKind::Copied).collect()
    }

    /// Returns every path touched by this diff, sorted and deduplicated.
    ///
    /// Renames and copies contribute both sides.
    #[must_use]
    pub fn affected_paths(&self) -> Vec<String> {
        let paths: BTreeSet<&str> = self.entries.iter().flat_map(|m| m.paths()).collect();
        paths.into_iter().map(str::to_string).collect()
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty diff");
        }
        let files_word = if self.total_files == 1 { "file" } else { "files" };
        write!(
            f,
            "{} {files_word} changed (+{}/-{})",
            self.total_files, self.total_lines_added, self.total_lines_deleted
        )
    }
}

impl<'de> Deserialize<'de> for Diff {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawDiff {
            entries: Vec<FileModification>,
            total_files: u64,
            total_lines_added: u64,
            total_lines_deleted: u64,
        }

        let raw = RawDiff::deserialize(deserializer)?;
        let diff = Self::new(raw.entries);
        if diff.total_files != raw.total_files
            || diff.total_lines_added != raw.total_lines_added
            || diff.total_lines_deleted != raw.total_lines_deleted
        {
            return Err(serde::de::Error::custom("diff totals do not match entries"));
        }
        Ok(diff)
    }
}
