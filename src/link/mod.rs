pub mod types;

pub use types::{BranchRef, FileRef, RepoRemote, SelectionRange, WebLink};

/// Branch used when a link is built against the default branch
pub const DEFAULT_BRANCH: &str = "main";

/// Remove a single trailing `.git` from a remote URL, if present.
pub fn strip_git_suffix(url: &str) -> &str {
    url.strip_suffix(".git").unwrap_or(url)
}

/// Build the web URL for a file and line range on the remote host.
///
/// The remote URL is used as-is apart from the `.git` suffix, so SSH-style
/// remotes (`git@host:org/repo.git`) pass through untouched. Multi-line
/// ranges produce `#L{start}-#L{end}`.
pub fn build_link(
    remote: &RepoRemote,
    branch: &BranchRef,
    file: &FileRef,
    range: SelectionRange,
    use_default_branch: bool,
) -> WebLink {
    let base = strip_git_suffix(&remote.url);
    let branch_segment = if use_default_branch {
        DEFAULT_BRANCH
    } else {
        branch.name.as_str()
    };

    let mut url = format!(
        "{}/blob/{}/{}#L{}",
        base, branch_segment, file.relative_path, range.start_line
    );
    if range.end_line > range.start_line {
        url.push_str(&format!("-#L{}", range.end_line));
    }

    WebLink { url }
}
