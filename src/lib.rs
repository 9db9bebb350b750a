//! # githublink
//!
//! Turns a file, line or commit in a git working copy into its page on
//! GitHub and opens it in the default browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use githublink::link::HostConfig;
//!
//! let host = HostConfig::default();
//! let slug = host.parse_remote_url("git@github.com:earthly/earthly.git").unwrap();
//! assert_eq!(
//!     host.format_blob_url(&slug, "c0ffee", "README.md", Some(3)),
//!     "https://github.com/earthly/earthly/blob/c0ffee/README.md#L3"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod browser;
pub mod cli;
pub mod error;
pub mod git;
pub mod link;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::error::LinkError;

/// The current version of githublink.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
