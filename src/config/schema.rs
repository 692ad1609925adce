use serde::Deserialize;

/// Optional user configuration.
///
/// Example YAML:
/// ```yaml
/// branch_timeout: "2s"
/// print_only: false
/// git_program: git
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long to wait for the branch query, as a humantime duration
    #[serde(default = "default_branch_timeout")]
    pub branch_timeout: String,

    /// Print the link instead of opening a browser
    #[serde(default)]
    pub print_only: bool,

    /// Executable used to query the current branch
    #[serde(default = "default_git_program")]
    pub git_program: String,
}

fn default_branch_timeout() -> String {
    "5s".to_string()
}

fn default_git_program() -> String {
    "git".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_timeout: default_branch_timeout(),
            print_only: false,
            git_program: default_git_program(),
        }
    }
}
