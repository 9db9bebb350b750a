//! Commit and remote resolution.

use tracing::debug;

use crate::error::LinkError;
use crate::git::Vcs;

/// Returns the commit checked out in the working copy.
pub fn current_commit<V: Vcs + ?Sized>(vcs: &V) -> Result<String, LinkError> {
    vcs.head_commit().map_err(LinkError::vcs("git sha"))
}

/// Lists the remote-tracking branches containing `commit`.
///
/// An empty listing is an error: a commit that only exists locally cannot
/// be linked. The listing order is kept as git reports it.
pub fn remote_branches_containing<V: Vcs + ?Sized>(
    vcs: &V,
    commit: &str,
) -> Result<Vec<String>, LinkError> {
    let branches = vcs
        .remote_branches_containing(commit)
        .map_err(LinkError::vcs("remote branches"))?;
    if branches.is_empty() {
        return Err(LinkError::NoRemoteBranch {
            commit: commit.to_string(),
        });
    }
    debug!(commit, ?branches, "remote branches containing commit");
    Ok(branches)
}

/// Returns the remote a remote-tracking branch belongs to.
///
/// `origin/feature/x` belongs to `origin`, and so does the symbolic entry
/// `origin/HEAD -> origin/main`.
pub fn remote_name(branch: &str) -> &str {
    branch.split('/').next().unwrap_or(branch)
}

/// Returns the configured fetch URL of `remote`.
pub fn remote_fetch_url<V: Vcs + ?Sized>(vcs: &V, remote: &str) -> Result<String, LinkError> {
    let url = vcs.remote_url(remote).map_err(LinkError::vcs("remote url"))?;
    debug!(remote, url = %url, "remote fetch url");
    Ok(url)
}
