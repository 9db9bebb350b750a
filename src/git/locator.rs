//! Locating link targets inside the working copy.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LinkError;
use crate::git::Vcs;

/// Resolves `path` to the form used in a blob URL.
///
/// Directories are returned unchanged. Files must be tracked and resolve to
/// their repository-relative name, independent of the current directory.
pub fn resolve_repo_path<V: Vcs + ?Sized>(vcs: &V, path: &str) -> Result<String, LinkError> {
    let not_tracked = |source: Box<dyn std::error::Error + Send + Sync>| LinkError::NotTracked {
        path: path.to_string(),
        source,
    };

    let metadata = fs::metadata(path).map_err(|e| not_tracked(e.into()))?;
    if metadata.is_dir() {
        debug!(path, "directory target used as-is");
        return Ok(path.to_string());
    }

    let mut names = vcs
        .tracked_files(Path::new(path))
        .map_err(|e| not_tracked(e.into()))?;
    match (names.pop(), names.is_empty()) {
        (Some(name), true) => {
            debug!(path, name = %name, "resolved tracked file");
            Ok(name)
        }
        (Some(_), false) => Err(not_tracked(
            format!("{path} matches more than one tracked file").into(),
        )),
        (None, _) => Err(not_tracked("no tracked file matches".into())),
    }
}

/// Returns true if `candidate` is the full id of an existing commit.
///
/// Abbreviated hashes, branch names and other revisions resolve to an id
/// that differs from the input and are rejected.
pub fn is_commit_id<V: Vcs + ?Sized>(vcs: &V, candidate: &str) -> bool {
    if candidate.is_empty() || candidate.starts_with('-') {
        return false;
    }
    match vcs.rev_parse(&format!("{candidate}^{{commit}}")) {
        Ok(resolved) => resolved == candidate,
        Err(e) => {
            debug!(candidate, error = %e, "not a commit id");
            false
        }
    }
}
