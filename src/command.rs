use std::fmt;
use std::path::PathBuf;

use crate::browser::BrowserLauncher;
use crate::editor::EditorContext;
use crate::link::{build_link, BranchRef, WebLink};
use crate::repo::{find_repo_root_within, RepoMetadataReader};
use crate::verbose_eprintln;

/// Which branch the link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchTarget {
    /// The fixed default branch (`main`)
    Default,
    /// Whatever branch is checked out
    Current,
}

/// Reasons an open command gives up before building a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    NoActiveEditor,
    NoRepository,
    RemoteNotFound,
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::NoActiveEditor => write!(f, "No active file."),
            OpenError::NoRepository => write!(f, "No git repository found."),
            OpenError::RemoteNotFound => write!(f, "Git origin not found."),
        }
    }
}

impl std::error::Error for OpenError {}

/// Where to start looking for the repository root
#[derive(Debug, Clone)]
pub struct Workspace {
    pub search_from: PathBuf,
    /// Directories the search never ascends into
    pub ceilings: Vec<PathBuf>,
}

/// Build the link for the active file and hand it to the browser.
///
/// Steps run in a fixed order and stop at the first missing piece: selection,
/// repository root, remote URL. A failed branch lookup does not stop the
/// command; the link is built with an empty branch segment.
pub async fn open_file<E, R, B>(
    target: BranchTarget,
    workspace: &Workspace,
    editor: &E,
    repo: &R,
    browser: &B,
) -> Result<WebLink, OpenError>
where
    E: EditorContext,
    R: RepoMetadataReader,
    B: BrowserLauncher,
{
    let range = editor.selection_range().ok_or(OpenError::NoActiveEditor)?;

    let repo_root = find_repo_root_within(&workspace.search_from, &workspace.ceilings)
        .ok_or(OpenError::NoRepository)?;
    verbose_eprintln!("Repository root: {}", repo_root.display());

    let remote = repo.remote_url(&repo_root).ok_or(OpenError::RemoteNotFound)?;
    let file = editor.relative_file_path(&repo_root);

    // The default branch is a literal, so git is not consulted for it
    let branch = match target {
        BranchTarget::Default => BranchRef::default(),
        BranchTarget::Current => repo.current_branch(&repo_root).await,
    };

    let link = build_link(&remote, &branch, &file, range, target == BranchTarget::Default);
    verbose_eprintln!("Built link: {}", link);

    browser.open(&link.url);
    Ok(link)
}
