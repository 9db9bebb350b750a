//! The link resolution pipeline.
//!
//! Input is located as a [`Target`], the commit to link is settled, the
//! owning remote is found from the first remote-tracking branch that
//! contains the commit, and the remote's URL is turned into a web link.

use tracing::{debug, warn};

use crate::error::LinkError;
use crate::git::{self, Vcs};
use crate::link::host::HostConfig;
use crate::link::remote_url::RepoSlug;
use crate::link::target::{CommitId, Target};

/// A fully resolved link and the facts it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// What the link renders.
    pub target: Target,
    /// The revision the link is pinned to.
    pub commit: CommitId,
    /// The remote whose URL was used.
    pub remote: String,
    /// Owner and repository on the hosting service.
    pub slug: RepoSlug,
    /// The web URL.
    pub url: String,
}

/// Resolves paths and commit ids into web links.
pub struct LinkResolver<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
    host: &'a HostConfig,
}

impl<'a, V: Vcs + ?Sized> LinkResolver<'a, V> {
    /// Creates a resolver querying `vcs` and formatting links for `host`.
    pub fn new(vcs: &'a V, host: &'a HostConfig) -> Self {
        Self { vcs, host }
    }

    /// Resolves `input`, a path or full commit id, into a web link.
    ///
    /// `line` anchors file links and is ignored for commit links.
    pub fn resolve(&self, input: &str, line: Option<u32>) -> Result<ResolvedLink, LinkError> {
        let target = self.locate_target(input, line)?;
        let commit = self.resolve_commit(&target)?;
        let (remote, remote_url) = self.resolve_remote(&commit)?;
        let slug = self.host.parse_remote_url(&remote_url)?;
        let url = self.host.web_url(&slug, &commit, &target);
        debug!(url = %url, "resolved link");

        Ok(ResolvedLink {
            target,
            commit,
            remote,
            slug,
            url,
        })
    }

    /// Decides what `input` refers to.
    ///
    /// Paths win. Only when `input` is not a usable path and is the full id
    /// of an existing commit does it become a commit target.
    pub fn locate_target(&self, input: &str, line: Option<u32>) -> Result<Target, LinkError> {
        match git::resolve_repo_path(self.vcs, input) {
            Ok(path) => Ok(Target::FileLine { path, line }),
            Err(err) => {
                if CommitId::is_full_hash(input) && git::is_commit_id(self.vcs, input) {
                    if let Some(line) = line {
                        warn!(line, "line number ignored when linking a commit");
                    }
                    Ok(Target::Commit(CommitId::new(input)))
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Returns the commit to link: the target's own, or HEAD.
    pub fn resolve_commit(&self, target: &Target) -> Result<CommitId, LinkError> {
        match target.pinned_commit() {
            Some(id) => Ok(id.clone()),
            None => git::current_commit(self.vcs).map(CommitId::new),
        }
    }

    /// Returns the name and fetch URL of the remote to link against.
    ///
    /// The first remote-tracking branch containing `commit` decides; git's
    /// listing order is not second-guessed.
    pub fn resolve_remote(&self, commit: &CommitId) -> Result<(String, String), LinkError> {
        let branches = git::remote_branches_containing(self.vcs, commit.as_str())?;
        let remote = branches
            .first()
            .map(|branch| git::remote_name(branch).to_string())
            .ok_or_else(|| LinkError::NoRemoteBranch {
                commit: commit.to_string(),
            })?;
        let url = git::remote_fetch_url(self.vcs, &remote)?;
        Ok((remote, url))
    }
}
