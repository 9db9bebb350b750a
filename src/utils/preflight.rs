//! Preflight validation checks for early failure detection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::Repository;

/// Validates that `path` is inside a git working copy.
///
/// Returns the working copy root. This is a lightweight check that opens
/// the repository without loading any commit data, so commands can fail
/// with a clear message before running git queries.
pub fn check_git_repository<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let repo = Repository::discover(path.as_ref()).context(
        "Not in a git repository. Please run this command from within a git working copy.",
    )?;

    repo.workdir()
        .map(Path::to_path_buf)
        .context("Repository has no working directory (bare repository)")
}
