//! External process execution.
//!
//! Every metadata query goes through [`ProcessRunner`], which captures
//! standard output, trims it and reports failures with the attempted
//! command attached.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// An external command that could not be started or exited unsuccessfully.
#[derive(Error, Debug)]
#[error("command `{command}` failed")]
pub struct ExecError {
    /// The command line that was attempted.
    pub command: String,
    /// Why it failed: a spawn error, or the exit status and stderr.
    #[source]
    pub source: io::Error,
}

impl ExecError {
    /// Creates an error for `command` with the given cause.
    pub fn new(command: impl Into<String>, source: io::Error) -> Self {
        Self {
            command: command.into(),
            source,
        }
    }
}

/// Runs external commands in a fixed working directory.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    cwd: PathBuf,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ProcessRunner {
    /// Creates a runner that executes commands in `cwd`.
    pub fn new<P: AsRef<Path>>(cwd: P) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    /// Runs `program` with `args` and returns its trimmed standard output.
    pub fn run<I, S>(&self, program: &str, args: I) -> Result<String, ExecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let command = render_command(program, &args);
        debug!(command = %command, cwd = %self.cwd.display(), "running external command");

        let output = Command::new(program)
            .args(&args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| ExecError::new(&command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let cause = if stderr.is_empty() {
                io::Error::other(output.status.to_string())
            } else {
                io::Error::other(format!("{}: {stderr}", output.status))
            };
            return Err(ExecError::new(command, cause));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Runs `program` and splits its trimmed output into non-empty lines.
    ///
    /// Each line is trimmed as well, so indented listings such as
    /// `git branch -r` come back as bare names. Order is preserved.
    pub fn run_lines<I, S>(&self, program: &str, args: I) -> Result<Vec<String>, ExecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.run(program, args)?;
        Ok(split_lines(&output))
    }
}

/// Splits command output into trimmed, non-empty lines.
pub fn split_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn render_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut command = program.to_string();
    for arg in args {
        command.push(' ');
        command.push_str(&arg.as_ref().to_string_lossy());
    }
    command
}
