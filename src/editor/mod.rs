pub mod cli;
pub mod selection;

pub use cli::{parse_line_spec, CliEditor};
pub use selection::Selection;

use std::path::Path;

use crate::link::{FileRef, SelectionRange};

/// The active file and selection a link is built for
pub trait EditorContext {
    /// 1-based inclusive line range, or `None` when no file is active
    fn selection_range(&self) -> Option<SelectionRange>;

    /// Active file path relative to `repo_root`
    fn relative_file_path(&self, repo_root: &Path) -> FileRef;
}

/// Express `file` relative to `repo_root` with `/` separators.
///
/// Files outside the root keep the path they were given.
pub fn relative_path(repo_root: &Path, file: &Path) -> FileRef {
    let relative_path = match file.strip_prefix(repo_root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => file.to_string_lossy().into_owned(),
    };
    FileRef { relative_path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_path_inside_root() {
        let root = PathBuf::from("/work/widgets");
        let file = root.join("src").join("app.ts");
        assert_eq!(relative_path(&root, &file).relative_path, "src/app.ts");
    }

    #[test]
    fn test_relative_path_outside_root() {
        let root = PathBuf::from("/work/widgets");
        let file = PathBuf::from("/elsewhere/notes.md");
        assert_eq!(relative_path(&root, &file).relative_path, "/elsewhere/notes.md");
    }
}
