use std::path::{Path, PathBuf};

use super::{relative_path, EditorContext, Selection};
use crate::link::{FileRef, SelectionRange};

/// Editor state taken from command-line arguments
#[derive(Debug, Clone)]
pub struct CliEditor {
    pub file: Option<PathBuf>,
    pub selection: Selection,
}

impl CliEditor {
    /// Build from an optional file, a 1-based cursor line and an optional
    /// 1-based `(start, end)` selection. The selection wins over the cursor.
    pub fn new(file: Option<PathBuf>, line: Option<u32>, lines: Option<(u32, u32)>) -> Self {
        let selection = match (lines, line) {
            (Some((start, end)), _) => Selection::span(start.saturating_sub(1), end.saturating_sub(1)),
            (None, Some(line)) => Selection::cursor(line.saturating_sub(1)),
            (None, None) => Selection::cursor(0),
        };
        Self { file, selection }
    }
}

impl EditorContext for CliEditor {
    fn selection_range(&self) -> Option<SelectionRange> {
        self.file.as_ref()?;
        Some(self.selection.to_range())
    }

    fn relative_file_path(&self, repo_root: &Path) -> FileRef {
        match &self.file {
            Some(file) => relative_path(repo_root, file),
            None => FileRef {
                relative_path: String::new(),
            },
        }
    }
}

/// Parse a `--lines` value such as `10-15` or `10:15` into 1-based lines.
pub fn parse_line_spec(s: &str) -> Result<(u32, u32), String> {
    let (a, b) = s
        .split_once(&['-', ':'][..])
        .ok_or_else(|| format!("expected START-END, got '{}'", s))?;

    let parse = |part: &str| -> Result<u32, String> {
        let n: u32 = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid line number '{}'", part.trim()))?;
        if n == 0 {
            return Err("line numbers start at 1".to_string());
        }
        Ok(n)
    };

    Ok((parse(a)?, parse(b)?))
}
