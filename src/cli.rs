//! CLI interface for githublink.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::browser::{deliver, Browser, CommandBrowser, Delivery, SystemBrowser};
use crate::git::{GitRepository, Vcs};
use crate::link::{HostConfig, LinkResolver};
use crate::utils::{check_git_repository, Settings};

/// githublink: open the GitHub page for a file, line or commit.
#[derive(Parser, Debug)]
#[command(name = "githublink")]
#[command(
    about = "Opens the GitHub page for a file, line or commit in the current checkout",
    long_about = "Opens the GitHub page for a file, line or commit in the current checkout.\n\n\
                  Files link to the commit checked out, through the first remote branch that \
                  contains it. A full commit hash links to that commit. If no browser can be \
                  opened the link is printed instead."
)]
#[command(version)]
pub struct Cli {
    /// File or directory to link, or a full 40-character commit hash.
    #[arg(value_name = "PATH_OR_COMMIT")]
    pub target: String,

    /// Line number to anchor the link to.
    #[arg(value_name = "LINE")]
    pub line: Option<u32>,
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load()?;
        let host = settings.host_config();
        let root = check_git_repository(".")?;
        debug!(root = %root.display(), host = host.host(), "working copy found");

        let browser: Box<dyn Browser> = match settings.browser_command() {
            Some(command) => {
                let browser = CommandBrowser::new(command);
                debug!(command = browser.command(), "using configured browser");
                Box::new(browser)
            }
            None => Box::new(SystemBrowser),
        };

        let repo = GitRepository::open();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(&repo, &host, browser.as_ref(), &mut out)?;
        Ok(())
    }

    /// Resolves the link with the given collaborators and delivers it.
    pub fn run<V, B, W>(
        &self,
        vcs: &V,
        host: &HostConfig,
        browser: &B,
        out: &mut W,
    ) -> Result<Delivery>
    where
        V: Vcs + ?Sized,
        B: Browser + ?Sized,
        W: Write + ?Sized,
    {
        let link = LinkResolver::new(vcs, host).resolve(&self.target, self.line)?;
        deliver(&link.url, browser, out).context("Failed to print link")
    }
}
