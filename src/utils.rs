//! Utility functions and helpers.

pub mod preflight;
pub mod process;
pub mod settings;

pub use preflight::check_git_repository;
pub use process::{ExecError, ProcessRunner};
pub use settings::Settings;
