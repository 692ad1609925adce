use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use remote_link::browser::{PrintOnly, SystemBrowser};
use remote_link::command::{open_file, BranchTarget, OpenError, Workspace};
use remote_link::editor::{parse_line_spec, CliEditor};
use remote_link::repo::GitRepo;
use remote_link::verbose_eprintln;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NO_FILE: i32 = 1;
const EXIT_NO_REPO: i32 = 2;
const EXIT_NO_REMOTE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug)]
struct Target {
    /// File to link to; without it there is nothing to open
    file: Option<PathBuf>,

    /// Cursor line (1-based)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..), conflicts_with = "lines")]
    line: Option<u32>,

    /// Selected lines, e.g. 10-15 (1-based, inclusive)
    #[arg(long, value_parser = parse_line_spec)]
    lines: Option<(u32, u32)>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the file at the default branch (main)
    Main(Target),
    /// Open the file at the currently checked-out branch
    Current(Target),
}

#[derive(Parser, Debug)]
#[command(name = "remote-link")]
#[command(about = "Open the current file and lines on the git remote", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/remote-link/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory to search for the repository from (defaults to the file's directory)
    #[arg(short = 'C', long = "repo", global = true)]
    repo: Option<PathBuf>,

    /// Print the link without opening a browser
    #[arg(long, global = true)]
    print: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    remote_link::diag::set_verbose(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match remote_link::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = remote_link::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let timeout = match config.branch_timeout() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let (target, args) = match cli.command {
        Commands::Main(args) => (BranchTarget::Default, args),
        Commands::Current(args) => (BranchTarget::Current, args),
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let file = args.file.map(|f| absolutize(&cwd, f));

    // Search from the explicit repo dir, else the file's directory, else cwd
    let search_from = match (cli.repo, &file) {
        (Some(dir), _) => absolutize(&cwd, dir),
        (None, Some(f)) => f.parent().map(PathBuf::from).unwrap_or_else(|| cwd.clone()),
        (None, None) => cwd.clone(),
    };
    verbose_eprintln!("Searching for repository from {}", search_from.display());

    let editor = CliEditor::new(file, args.line, args.lines);
    let repo = GitRepo::new(config.git_program.clone(), timeout);
    let ceilings: Vec<PathBuf> = std::env::var_os("GIT_CEILING_DIRECTORIES")
        .map(|v| std::env::split_paths(&v).filter(|p| p.is_absolute()).collect())
        .unwrap_or_default();
    let workspace = Workspace { search_from, ceilings };
    let print_only = cli.print || config.print_only;

    let result = if print_only {
        open_file(target, &workspace, &editor, &repo, &PrintOnly).await
    } else {
        open_file(target, &workspace, &editor, &repo, &SystemBrowser).await
    };

    let link = match result {
        Ok(link) => link,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(match e {
                OpenError::NoActiveEditor => EXIT_NO_FILE,
                OpenError::NoRepository => EXIT_NO_REPO,
                OpenError::RemoteNotFound => EXIT_NO_REMOTE,
            });
        }
    };

    let use_colors = remote_link::output::should_use_colors();
    if print_only {
        println!("{}", remote_link::output::format_link(&link, use_colors));
    } else {
        println!("{}", remote_link::output::format_opened(&link, use_colors));
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Resolve `path` against `cwd` without touching the filesystem
fn absolutize(cwd: &std::path::Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
