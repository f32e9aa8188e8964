//! Structural Git object metadata.
//!
//! [`GitMetadata`] carries the facts about a commit that are independent of
//! its content: identity, ancestry, the refs pointing at it, and an
//! optional signature. Parent order is significant (the first parent is the
//! primary ancestry line of a merge); ref names are a set, because branch
//! and tag names are unique identifiers and duplicates carry no meaning.


use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::limits::BRANCH_NAME_MAX_LENGTH;
use crate::primitives::{GitSha, GpgSignature};

/// Validated structural metadata shared by any Git commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitMetadata {
    sha: GitSha,
    parents: Vec<GitSha>,
    refs: BTreeSet<String>,
    signature: Option<GpgSignature>,
}

impl GitMetadata {
    /// Validates raw structural facts into metadata.
    ///
    /// Every SHA (the object's own and each parent's) passes through the
    /// SHA validator; ref names are trimmed and bounded; duplicate refs
    /// collapse silently. Parent order is preserved verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidShaFormat`] for a bad `sha` or any
    /// bad parent, [`ValidationError::EmptyField`] /
    /// [`ValidationError::FieldTooLong`] for bad ref names, and propagates
    /// signature validation failures.
    pub fn new(
        sha: &str,
        parents: &[&str],
        refs: &[&str],
        signature: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let sha = GitSha::parse("sha", sha)?;
        let parents = parents
            .iter()
            .map(|p| GitSha::parse("parents", p))
            .collect::<Result<Vec<_>, _>>()?;
        let refs = refs
            .iter()
            .map(|r| validate_ref_name(r))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let signature = GpgSignature::from_optional(signature)?;

        Ok(Self {
            sha,
            parents,
            refs,
            signature,
        })
    }

    /// Returns the object id.
    #[must_use]
    pub const fn sha(&self) -> &GitSha {
        &self.sha
    }

    /// Returns the parent ids in ancestry order (first parent first).
    #[must_use]
    pub fn parents(&self) -> &[GitSha] {
        &self.parents
    }

    /// Returns the branch/tag names pointing at this object.
    #[must_use]
    pub const fn refs(&self) -> &BTreeSet<String> {
        &self.refs
    }

    /// Returns the signature block, if the object is signed.
    #[must_use]
    pub const fn signature(&self) -> Option<&GpgSignature> {
        self.signature.as_ref()
    }

    /// True for the first commit in a history (no parents).
    #[must_use]
    pub fn is_root_commit(&self) -> bool {
        self.parents.is_empty()
    }

    /// True for a merge commit (two or more parents).
    #[must_use]
    pub fn is_merge_commit(&self) -> bool {
        self.parents.len() >= 2
    }
}

impl fmt::Display for GitMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.sha.short())?;
        match self.parents.as_slice() {
            [] => f.write_str("(root)")?,
            [parent] => write!(f, "(parent: {})", parent.short())?,
            parents => write!(f, "({} parents)", parents.len())?,
        }
        if self.signature.is_some() {
            f.write_str(" [signed]")?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for GitMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawMetadata {
            sha: GitSha,
            #[serde(default)]
            parents: Vec<GitSha>,
            #[serde(default)]
            refs: Vec<String>,
            #[serde(default)]
            signature: Option<GpgSignature>,
        }

        let raw = RawMetadata::deserialize(deserializer)?;
        let refs = raw
            .refs
            .iter()
            .map(|r| validate_ref_name(r))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(serde::de::Error::custom)?;

        Ok(Self {
            sha: raw.sha,
            parents: raw.parents,
            refs,
            signature: raw.signature,
        })
    }
}

/// Trims and bounds-checks a branch/tag name.
fn validate_ref_name(raw: &str) -> Result<String, ValidationError> {
    const FIELD: &str = "refs";

    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: FIELD });
    }
    let length = name.chars().count();
    if length > BRANCH_NAME_MAX_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field: FIELD,
            limit: BRANCH_NAME_MAX_LENGTH,
            actual: length,
        });
    }
    Ok(name.to_string())
}
