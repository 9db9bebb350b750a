//! Git operations and repository metadata.

use std::path::Path;

use crate::utils::process::ExecError;

pub mod locator;
pub mod remote;
pub mod repository;
#[cfg(test)]
pub(crate) mod test_utils;

pub use locator::{is_commit_id, resolve_repo_path};
pub use remote::{current_commit, remote_branches_containing, remote_fetch_url, remote_name};
pub use repository::GitRepository;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;

/// Length of a full SHA-1 commit hash in hex characters.
pub const FULL_HASH_LEN: usize = 40;

/// The repository metadata the link pipeline depends on.
///
/// [`GitRepository`] answers these by running the `git` binary; tests
/// substitute a scripted implementation.
pub trait Vcs {
    /// Returns the commit currently checked out.
    fn head_commit(&self) -> Result<String, ExecError>;

    /// Lists remote-tracking branches containing `commit`, in listing order.
    fn remote_branches_containing(&self, commit: &str) -> Result<Vec<String>, ExecError>;

    /// Returns the configured fetch URL of `remote`.
    fn remote_url(&self, remote: &str) -> Result<String, ExecError>;

    /// Lists tracked files matching `pathspec` by their repository-relative
    /// names. Fails if nothing tracked matches.
    fn tracked_files(&self, pathspec: &Path) -> Result<Vec<String>, ExecError>;

    /// Resolves an arbitrary revision string to an object id.
    fn rev_parse(&self, rev: &str) -> Result<String, ExecError>;
}
