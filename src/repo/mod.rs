pub mod git;

pub use git::{find_repo_root, find_repo_root_within, parse_remote_url, GitRepo};

use std::future::Future;
use std::path::Path;

use crate::link::{BranchRef, RepoRemote};

/// Read-only lookups against a repository on disk.
pub trait RepoMetadataReader {
    /// First remote URL found in the repository configuration, if any
    fn remote_url(&self, repo_root: &Path) -> Option<RepoRemote>;

    /// Short name of the checked-out branch. Failures yield an empty name.
    fn current_branch(&self, repo_root: &Path) -> impl Future<Output = BranchRef>;
}
