use std::fmt;

/// Inclusive, 1-based line span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start_line: u32,
    pub end_line: u32,
}

impl SelectionRange {
    /// Build a range from two 1-based lines in either order
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            start_line: a.min(b),
            end_line: a.max(b),
        }
    }

    /// Range covering a single line
    pub fn single(line: u32) -> Self {
        Self {
            start_line: line,
            end_line: line,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// Remote URL as configured in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRemote {
    pub url: String,
}

/// Branch name used in the link; empty when resolution failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchRef {
    pub name: String,
}

/// File path relative to the repository root, `/`-separated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub relative_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebLink {
    pub url: String,
}

impl fmt::Display for WebLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
