//! Errors raised while resolving a link.

use thiserror::Error;

use crate::utils::process::ExecError;

/// Failures of the link resolution pipeline.
///
/// Every variant is terminal for the run.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The input is neither a tracked path nor a full commit id.
    #[error("{path} is not tracked by git")]
    NotTracked {
        /// The raw input that failed to resolve.
        path: String,
        /// Why the path could not be resolved.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A git metadata query failed.
    #[error("failed to get {what}")]
    Vcs {
        /// What was being looked up, e.g. "remote branches".
        what: &'static str,
        /// The failed command.
        #[source]
        source: ExecError,
    },

    /// The commit exists locally but on no remote-tracking branch.
    #[error("commit {commit} doesn't exist on any remote branches; push it first")]
    NoRemoteBranch {
        /// The commit that could not be found on a remote.
        commit: String,
    },

    /// The remote URL path is not of the form `owner/repo`.
    #[error("failed to split {0} into owner and repository")]
    MalformedRemote(String),

    /// The remote URL is neither SSH shorthand nor a valid URL.
    #[error("failed to parse remote url {url}")]
    UrlParse {
        /// The remote URL as configured.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}

impl LinkError {
    /// Wraps a failed git query.
    pub(crate) fn vcs(what: &'static str) -> impl FnOnce(ExecError) -> Self {
        move |source| Self::Vcs { what, source }
    }
}
