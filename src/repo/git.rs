use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tokio::process::Command;

use super::RepoMetadataReader;
use crate::link::{BranchRef, RepoRemote};
use crate::{diag_eprintln, verbose_eprintln};

/// Default limit for the branch query
pub const DEFAULT_BRANCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Repository metadata backed by the `.git` directory and the git CLI
#[derive(Debug, Clone)]
pub struct GitRepo {
    pub git_program: String,
    pub timeout: Duration,
}

impl Default for GitRepo {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
            timeout: DEFAULT_BRANCH_TIMEOUT,
        }
    }
}

impl GitRepo {
    pub fn new(git_program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            git_program: git_program.into(),
            timeout,
        }
    }
}

/// Find the nearest ancestor of `start` (inclusive) that contains a `.git` entry.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    find_repo_root_within(start, &[])
}

/// Like [`find_repo_root`], but never ascends into one of `ceilings`,
/// following git's `GIT_CEILING_DIRECTORIES`.
pub fn find_repo_root_within(start: &Path, ceilings: &[PathBuf]) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        if let Some(parent) = dir.parent() {
            if ceilings.iter().any(|c| c == parent) {
                break;
            }
        }
    }
    None
}

// The value stops before `\r` so CRLF config files match the LF reading
static REMOTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\s*=\s*([^\r\n]*)").expect("remote url pattern is valid"));

/// Extract the first `url = <value>` from git config text.
///
/// The value is returned verbatim; no attempt is made to check that it is a URL.
pub fn parse_remote_url(config: &str) -> Option<String> {
    REMOTE_URL_RE
        .captures(config)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl RepoMetadataReader for GitRepo {
    fn remote_url(&self, repo_root: &Path) -> Option<RepoRemote> {
        let config_path = repo_root.join(".git").join("config");
        let config = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) => {
                diag_eprintln!("Error reading git config at {}: {}", config_path.display(), e);
                return None;
            }
        };

        let url = parse_remote_url(&config)?;
        verbose_eprintln!("Remote URL: {}", url);
        Some(RepoRemote { url })
    }

    async fn current_branch(&self, repo_root: &Path) -> BranchRef {
        let name = match query_branch(&self.git_program, repo_root, self.timeout).await {
            Ok(name) => name,
            Err(e) => {
                diag_eprintln!("Error getting current branch: {}", e);
                String::new()
            }
        };
        verbose_eprintln!("Current branch: {:?}", name);
        BranchRef { name }
    }
}

/// Run `git symbolic-ref --short HEAD` and return its trimmed output.
async fn query_branch(program: &str, cwd: &Path, timeout: Duration) -> anyhow::Result<String> {
    let child = Command::new(program)
        .args(["symbolic-ref", "--short", "HEAD"])
        .current_dir(cwd)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| anyhow::anyhow!("failed to run {}: {}", program, e))?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => anyhow::bail!(
            "{} symbolic-ref timed out after {}",
            program,
            humantime::format_duration(timeout)
        ),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("{} exited with {}: {}", program, output.status, stderr.trim());
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| anyhow::anyhow!("branch name is not valid UTF-8"))?;
    Ok(stdout.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE_CONFIG: &str = "[core]\n\trepositoryformatversion = 0\n\tbare = false\n[remote \"origin\"]\n\turl = git@github.com:acme/widgets.git\n\tfetch = +refs/heads/*:refs/remotes/origin/*\n[remote \"upstream\"]\n\turl = https://github.com/upstream/widgets.git\n";

    fn fake_repo(config: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        if let Some(config) = config {
            fs::write(dir.path().join(".git").join("config"), config).unwrap();
        }
        dir
    }

    #[test]
    fn test_parse_remote_url_first_match() {
        assert_eq!(
            parse_remote_url(SAMPLE_CONFIG).as_deref(),
            Some("git@github.com:acme/widgets.git")
        );
    }

    #[test]
    fn test_parse_remote_url_no_spaces() {
        assert_eq!(
            parse_remote_url("[remote \"origin\"]\nurl=https://h/o/r\n").as_deref(),
            Some("https://h/o/r")
        );
    }

    #[test]
    fn test_parse_remote_url_missing() {
        assert_eq!(parse_remote_url("[core]\n\tbare = false\n"), None);
    }

    #[test]
    fn test_remote_url_reads_git_config() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let remote = GitRepo::default().remote_url(repo.path()).unwrap();
        assert_eq!(remote.url, "git@github.com:acme/widgets.git");
    }

    #[test]
    fn test_remote_url_unreadable_config() {
        let repo = fake_repo(None);
        assert!(GitRepo::default().remote_url(repo.path()).is_none());
    }

    #[test]
    fn test_find_repo_root_from_nested_dir() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let nested = repo.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_repo_root(&nested), Some(repo.path().to_path_buf()));
    }

    #[test]
    fn test_find_repo_root_from_file() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let file = repo.path().join("main.rs");
        fs::write(&file, "fn main() {}\n").unwrap();
        assert_eq!(find_repo_root(&file), Some(repo.path().to_path_buf()));
    }

    #[tokio::test]
    async fn test_current_branch_missing_program_is_empty() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let git = GitRepo::new("remote-link-no-such-git", DEFAULT_BRANCH_TIMEOUT);
        let branch = git.current_branch(repo.path()).await;
        assert_eq!(branch.name, "");
    }

    #[tokio::test]
    async fn test_current_branch_reads_checked_out_branch() {
        let dir = tempfile::tempdir().unwrap();
        let init = std::process::Command::new("git")
            .args(["init", "-q", "-b", "feature/x"])
            .current_dir(dir.path())
            .status();
        // Skip when git is unavailable or too old for `init -b`
        if !matches!(init, Ok(status) if status.success()) {
            return;
        }

        let branch = GitRepo::default().current_branch(dir.path()).await;
        assert_eq!(branch.name, "feature/x");
    }

    #[cfg(unix)]
    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_current_branch_nonzero_exit_is_empty() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let bin = tempfile::tempdir().unwrap();
        let fake_git = script(bin.path(), "git", "echo main\necho 'fatal: ref HEAD is not a symbolic ref' >&2\nexit 128");

        let git = GitRepo::new(fake_git.to_string_lossy(), DEFAULT_BRANCH_TIMEOUT);
        let branch = git.current_branch(repo.path()).await;
        assert_eq!(branch.name, "");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_current_branch_timeout_is_empty() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let bin = tempfile::tempdir().unwrap();
        let slow_git = script(bin.path(), "git", "exec sleep 10");

        let git = GitRepo::new(slow_git.to_string_lossy(), Duration::from_millis(100));
        let started = std::time::Instant::now();
        let branch = git.current_branch(repo.path()).await;

        assert_eq!(branch.name, "");
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_parse_remote_url_crlf() {
        let config = "[remote \"origin\"]\r\n\turl = https://github.com/acme/widgets.git\r\n\tfetch = +refs/heads/*:refs/remotes/origin/*\r\n";
        let url = parse_remote_url(config).unwrap();
        assert_eq!(url, "https://github.com/acme/widgets.git");

        let link = crate::link::build_link(
            &RepoRemote { url },
            &BranchRef::default(),
            &crate::link::FileRef {
                relative_path: "a.rs".to_string(),
            },
            crate::link::SelectionRange::single(1),
            true,
        );
        assert_eq!(link.url, "https://github.com/acme/widgets/blob/main/a.rs#L1");
    }

    #[test]
    fn test_find_repo_root_stops_at_ceiling() {
        let outer = fake_repo(Some(SAMPLE_CONFIG));
        let nested = outer.path().join("work").join("src");
        fs::create_dir_all(&nested).unwrap();

        let ceilings = vec![outer.path().to_path_buf()];
        assert_eq!(find_repo_root_within(&nested, &ceilings), None);
        assert_eq!(find_repo_root(&nested), Some(outer.path().to_path_buf()));
    }

    #[test]
    fn test_find_repo_root_ceiling_does_not_hide_start() {
        let repo = fake_repo(Some(SAMPLE_CONFIG));
        let parent = repo.path().parent().unwrap().to_path_buf();
        assert_eq!(
            find_repo_root_within(repo.path(), &[parent]),
            Some(repo.path().to_path_buf())
        );
    }
}
