//! Hosting service URL layout.

use crate::error::LinkError;
use crate::link::remote_url::{parse_remote_url, RepoSlug};
use crate::link::target::{CommitId, Target};

/// Host used when nothing else is configured.
pub const DEFAULT_HOST: &str = "github.com";

/// The hosting service links are generated for.
///
/// Only the host name and SSH shorthand prefix vary; the URL layout is
/// GitHub's `blob`/`commit` scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    host: String,
    ssh_prefix: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl HostConfig {
    /// Creates a config for `host` with the conventional `git@<host>:`
    /// SSH prefix.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let ssh_prefix = format!("git@{host}:");
        Self { host, ssh_prefix }
    }

    /// Replaces the SSH shorthand prefix.
    pub fn with_ssh_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ssh_prefix = prefix.into();
        self
    }

    /// Returns the web host name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the SSH shorthand prefix.
    pub fn ssh_prefix(&self) -> &str {
        &self.ssh_prefix
    }

    /// Parses a remote fetch URL for this host.
    pub fn parse_remote_url(&self, remote_url: &str) -> Result<RepoSlug, LinkError> {
        parse_remote_url(remote_url, &self.ssh_prefix)
    }

    /// Formats a link to `path` at `commit`, anchored at `line` if given.
    ///
    /// The path is not percent-encoded.
    pub fn format_blob_url(
        &self,
        slug: &RepoSlug,
        commit: &str,
        path: &str,
        line: Option<u32>,
    ) -> String {
        let mut url = format!(
            "https://{}/{}/{}/blob/{commit}/{path}",
            self.host, slug.owner, slug.repo
        );
        if let Some(line) = line {
            url.push_str(&format!("#L{line}"));
        }
        url
    }

    /// Formats a link to a single commit.
    pub fn format_commit_url(&self, slug: &RepoSlug, commit: &str) -> String {
        format!(
            "https://{}/{}/{}/commit/{commit}",
            self.host, slug.owner, slug.repo
        )
    }

    /// Formats the link for `target`, with `commit` as the revision of a
    /// file target.
    pub fn web_url(&self, slug: &RepoSlug, commit: &CommitId, target: &Target) -> String {
        match target {
            Target::FileLine { path, line } => {
                self.format_blob_url(slug, commit.as_str(), path, *line)
            }
            Target::Commit(id) => self.format_commit_url(slug, id.as_str()),
        }
    }
}
