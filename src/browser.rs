//! Handing links to the user.

use std::io::{self, Write};

use tracing::debug;

use crate::utils::ProcessRunner;

/// Something that can show a URL to the user.
pub trait Browser {
    /// Opens `url`, best effort.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The platform's default web browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

/// A user-chosen command that receives the URL as its last argument.
///
/// The command line is split on whitespace, so `firefox --new-tab`
/// runs `firefox --new-tab <url>`.
#[derive(Debug, Clone)]
pub struct CommandBrowser {
    command: String,
}

impl CommandBrowser {
    /// Creates a browser that runs `command`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Returns the configured command line.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Browser for CommandBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty browser command"))?;
        let args: Vec<&str> = parts.chain(std::iter::once(url)).collect();

        ProcessRunner::default()
            .run(program, args)
            .map(|_| ())
            .map_err(|e| io::Error::new(e.source.kind(), format!("{e}: {}", e.source)))
    }
}

/// How a link reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The browser accepted the URL.
    Opened,
    /// The browser failed and the URL was printed instead.
    Printed,
}

/// Opens `url` in `browser`, printing it to `out` if that fails.
///
/// A browser failure is reported on stderr and is not an error; only a
/// failure to write the fallback is.
pub fn deliver<B, W>(url: &str, browser: &B, out: &mut W) -> io::Result<Delivery>
where
    B: Browser + ?Sized,
    W: Write + ?Sized,
{
    match browser.open(url) {
        Ok(()) => {
            debug!(url, "opened in browser");
            Ok(Delivery::Opened)
        }
        Err(e) => {
            eprintln!("failed to open url automatically: {e}");
            writeln!(out, "{url}")?;
            out.flush()?;
            Ok(Delivery::Printed)
        }
    }
}
