//! Turning working-copy locations into hosting-service links.

pub mod host;
pub mod remote_url;
pub mod resolver;
pub mod target;

pub use host::{HostConfig, DEFAULT_HOST};
pub use remote_url::{parse_remote_url, split_owner_repo, RepoSlug};
pub use resolver::{LinkResolver, ResolvedLink};
pub use target::{CommitId, Target};
