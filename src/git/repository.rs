//! Git repository access through the `git` binary.

use std::ffi::OsStr;
use std::path::Path;

use crate::git::Vcs;
use crate::utils::process::{ExecError, ProcessRunner};

/// A git working copy queried by shelling out to `git`.
#[derive(Debug, Clone, Default)]
pub struct GitRepository {
    runner: ProcessRunner,
}

impl GitRepository {
    /// Opens the repository containing the current directory.
    pub fn open() -> Self {
        Self::default()
    }

    /// Opens the repository containing `path`.
    ///
    /// Relative pathspecs passed to [`Vcs::tracked_files`] are resolved
    /// against `path`.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            runner: ProcessRunner::new(path),
        }
    }

    fn git<const N: usize>(&self, args: [&str; N]) -> Result<String, ExecError> {
        self.runner.run("git", args)
    }
}

impl Vcs for GitRepository {
    fn head_commit(&self) -> Result<String, ExecError> {
        self.git(["rev-parse", "HEAD"])
    }

    fn remote_branches_containing(&self, commit: &str) -> Result<Vec<String>, ExecError> {
        self.runner
            .run_lines("git", ["branch", "-r", "--contains", commit])
    }

    fn remote_url(&self, remote: &str) -> Result<String, ExecError> {
        let key = format!("remote.{remote}.url");
        self.git(["config", "--get", key.as_str()])
    }

    fn tracked_files(&self, pathspec: &Path) -> Result<Vec<String>, ExecError> {
        // -z keeps non-ASCII names unquoted; the pathspec matches literally
        let output = self.runner.run(
            "git",
            [
                OsStr::new("--literal-pathspecs"),
                OsStr::new("ls-files"),
                OsStr::new("-z"),
                OsStr::new("--full-name"),
                OsStr::new("--error-unmatch"),
                OsStr::new("--"),
                pathspec.as_os_str(),
            ],
        )?;
        Ok(output
            .split('\0')
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect())
    }

    fn rev_parse(&self, rev: &str) -> Result<String, ExecError> {
        self.git(["rev-parse", "--verify", "--quiet", rev])
    }
}
