//! Scripted [`Vcs`] for pipeline tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::git::Vcs;
use crate::utils::process::ExecError;

/// A [`Vcs`] answering from fixed tables and recording every call.
#[derive(Debug, Default)]
pub(crate) struct FakeVcs {
    pub head: Option<String>,
    pub branches: HashMap<String, Vec<String>>,
    pub remote_urls: HashMap<String, String>,
    pub tracked: HashMap<String, String>,
    pub objects: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_head(mut self, commit: &str) -> Self {
        self.head = Some(commit.to_string());
        self
    }

    pub fn with_branches(mut self, commit: &str, branches: &[&str]) -> Self {
        self.branches.insert(
            commit.to_string(),
            branches.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub fn with_remote(mut self, name: &str, url: &str) -> Self {
        self.remote_urls.insert(name.to_string(), url.to_string());
        self
    }

    pub fn with_tracked(mut self, path: &str, full_name: &str) -> Self {
        self.tracked.insert(path.to_string(), full_name.to_string());
        self
    }

    pub fn with_object(mut self, rev: &str, id: &str) -> Self {
        self.objects.insert(rev.to_string(), id.to_string());
        self
    }

    /// Registers `id` as an existing commit.
    pub fn with_commit(self, id: &str) -> Self {
        self.with_object(&format!("{id}^{{commit}}"), id)
    }

    /// Returns the names of the capabilities called so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

fn failed(command: String) -> ExecError {
    ExecError::new(command, io::Error::other("exit status: 128"))
}

impl Vcs for FakeVcs {
    fn head_commit(&self) -> Result<String, ExecError> {
        self.record("head_commit");
        self.head
            .clone()
            .ok_or_else(|| failed("git rev-parse HEAD".to_string()))
    }

    fn remote_branches_containing(&self, commit: &str) -> Result<Vec<String>, ExecError> {
        self.record("remote_branches_containing");
        Ok(self.branches.get(commit).cloned().unwrap_or_default())
    }

    fn remote_url(&self, remote: &str) -> Result<String, ExecError> {
        self.record("remote_url");
        self.remote_urls
            .get(remote)
            .cloned()
            .ok_or_else(|| failed(format!("git config --get remote.{remote}.url")))
    }

    fn tracked_files(&self, pathspec: &Path) -> Result<Vec<String>, ExecError> {
        self.record("tracked_files");
        let key = pathspec.to_string_lossy();
        self.tracked
            .get(key.as_ref())
            .map(|name| vec![name.clone()])
            .ok_or_else(|| failed(format!("git ls-files --full-name --error-unmatch -- {key}")))
    }

    fn rev_parse(&self, rev: &str) -> Result<String, ExecError> {
        self.record("rev_parse");
        self.objects
            .get(rev)
            .cloned()
            .ok_or_else(|| failed(format!("git rev-parse --verify --quiet {rev}")))
    }
}
