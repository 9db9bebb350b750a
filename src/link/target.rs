//! What a link points at.

use std::fmt;

use crate::git::FULL_HASH_LEN;

/// A full commit id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitId(String);

impl CommitId {
    /// Wraps a commit id reported by git.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns true if `s` has the shape of a full commit id: exactly
    /// [`FULL_HASH_LEN`] hex digits.
    ///
    /// Shape alone does not mean the commit exists; see
    /// [`crate::git::is_commit_id`].
    pub fn is_full_hash(s: &str) -> bool {
        s.len() == FULL_HASH_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The thing a link renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A file or directory at the current commit, optionally at a line.
    FileLine {
        /// Repository-relative path, or a directory as given.
        path: String,
        /// 1-based line to anchor to.
        line: Option<u32>,
    },
    /// A single commit.
    Commit(CommitId),
}

impl Target {
    /// Returns the commit pinned by the target itself, if any.
    pub fn pinned_commit(&self) -> Option<&CommitId> {
        match self {
            Self::Commit(id) => Some(id),
            Self::FileLine { .. } => None,
        }
    }
}
