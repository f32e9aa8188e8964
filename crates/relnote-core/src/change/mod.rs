//! Change grouping metadata.
//!
//! [`ChangeMetadata`] describes how one logical change relates to the
//! branch(es) it came from. It has no behavior beyond validation — it pins
//! down the contract the grouping stage must satisfy when it folds commits
//! into changes.


use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::limits::BRANCH_NAME_MAX_LENGTH;
use crate::primitives::GitSha;

// =============================================================================
// ChangeType
// =============================================================================

/// How a logical change landed on its target branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ChangeType {
    /// Commits pushed straight to the target branch.
    Direct,
    /// A merge commit from one source branch.
    Merge,
    /// A squash-merge collapsing one source branch.
    Squash,
    /// Commits replayed from one source branch.
    Rebase,
    /// A single merge commit combining several source branches.
    Octopus,
    /// The first change in a history; there is no source branch.
    Initial,
}

impl ChangeType {
    /// Parses a change type from its name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownChangeType`] for anything else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            "octopus" => Ok(Self::Octopus),
            "initial" => Ok(Self::Initial),
            _ => Err(ValidationError::UnknownChangeType {
                value: s.to_string(),
            }),
        }
    }

    /// Returns the canonical type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Merge => "merge",
            Self::Squash => "squash",
            Self::Rebase => "rebase",
            Self::Octopus => "octopus",
            Self::Initial => "initial",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ChangeMetadata
// =============================================================================

/// Validated description of where a logical change came from.
///
/// The source-branch cardinality rules are the contract the grouping stage
/// must honor:
///
/// - `octopus` requires at least two source branches
/// - `initial` requires none
/// - `merge`, `squash`, and `rebase` require exactly one
/// - `direct` allows at most one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeMetadata {
    change_type: ChangeType,
    source_branches: Vec<String>,
    target_branch: String,
    merge_base: Option<GitSha>,
    pull_request_id: Option<String>,
}

impl ChangeMetadata {
    /// Validates change metadata.
    ///
    /// Branch names are trimmed and bounded; source-branch order is
    /// preserved. `merge_base` passes through the SHA validator. A blank
    /// `pull_request_id` collapses to absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SourceBranchCount`] when the cardinality
    /// rules above are violated, [`ValidationError::EmptyField`] /
    /// [`ValidationError::FieldTooLong`] for bad branch names, and
    /// propagates `merge_base` SHA failures.
    pub fn new(
        change_type: ChangeType,
        source_branches: &[&str],
        target_branch: &str,
        merge_base: Option<&str>,
        pull_request_id: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let source_branches = source_branches
            .iter()
            .map(|b| validate_branch_name("source_branches", b))
            .collect::<Result<Vec<_>, _>>()?;
        let target_branch = validate_branch_name("target_branch", target_branch)?;

        check_source_cardinality(change_type, source_branches.len())?;

        let merge_base = merge_base
            .map(|sha| GitSha::parse("merge_base", sha))
            .transpose()?;
        let pull_request_id = pull_request_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Self {
            change_type,
            source_branches,
            target_branch,
            merge_base,
            pull_request_id,
        })
    }

    /// Returns how the change landed.
    #[must_use]
    pub const fn change_type(&self) -> ChangeType {
        self.change_type
    }

    /// Returns the source branch names in their original order.
    #[must_use]
    pub fn source_branches(&self) -> &[String] {
        &self.source_branches
    }

    /// Returns the branch the change landed on.
    #[must_use]
    pub fn target_branch(&self) -> &str {
        &self.target_branch
    }

    /// Returns the merge base commit id, when known.
    #[must_use]
    pub const fn merge_base(&self) -> Option<&GitSha> {
        self.merge_base.as_ref()
    }

    /// Returns the associated pull request identifier, when known.
    #[must_use]
    pub fn pull_request_id(&self) -> Option<&str> {
        self.pull_request_id.as_deref()
    }
}

impl fmt::Display for ChangeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_branches.as_slice() {
            [] => write!(f, "{} -> {}", self.change_type, self.target_branch),
            [branch] => {
                write!(f, "{} from {branch} -> {}", self.change_type, self.target_branch)
            },
            branches => write!(
                f,
                "{} from {} branches -> {}",
                self.change_type,
                branches.len(),
                self.target_branch
            ),
        }
    }
}

impl<'de> Deserialize<'de> for ChangeMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawChangeMetadata {
            change_type: ChangeType,
            #[serde(default)]
            source_branches: Vec<String>,
            target_branch: String,
            #[serde(default)]
            merge_base: Option<GitSha>,
            #[serde(default)]
            pull_request_id: Option<String>,
        }

        let raw = RawChangeMetadata::deserialize(deserializer)?;
        let sources: Vec<&str> = raw.source_branches.iter().map(String::as_str).collect();
        Self::new(
            raw.change_type,
            &sources,
            &raw.target_branch,
            raw.merge_base.as_ref().map(GitSha::as_str),
            raw.pull_request_id.as_deref(),
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Enforces the per-type source-branch count rules.
fn check_source_cardinality(
    change_type: ChangeType,
    actual: usize,
) -> Result<(), ValidationError> {
    let expected = match change_type {
        ChangeType::Octopus if actual < 2 => "at least 2",
        ChangeType::Initial if actual != 0 => "exactly 0",
        ChangeType::Merge | ChangeType::Squash | ChangeType::Rebase if actual != 1 => "exactly 1",
        ChangeType::Direct if actual > 1 => "at most 1",
        _ => return Ok(()),
    };
    Err(ValidationError::SourceBranchCount {
        change_type,
        expected,
        actual,
    })
}

/// Trims and bounds-checks a branch name.
fn validate_branch_name(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    let length = name.chars().count();
    if length > BRANCH_NAME_MAX_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field,
            limit: BRANCH_NAME_MAX_LENGTH,
            actual: length,
        });
    }
    Ok(name.to_string())
}
