use crate::link::SelectionRange;

/// A selection as an editor reports it: 0-based lines, `active_line` is
/// where the cursor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start_line: u32,
    pub end_line: u32,
    pub active_line: u32,
    pub is_empty: bool,
}

impl Selection {
    /// Empty selection with the cursor on a 0-based line
    pub fn cursor(line: u32) -> Self {
        Self {
            start_line: line,
            end_line: line,
            active_line: line,
            is_empty: true,
        }
    }

    /// Non-empty selection between two 0-based lines, cursor at `end`
    pub fn span(start: u32, end: u32) -> Self {
        Self {
            start_line: start.min(end),
            end_line: start.max(end),
            active_line: end,
            is_empty: false,
        }
    }

    /// Convert to the 1-based inclusive range used in links.
    ///
    /// An empty selection collapses to the cursor line.
    pub fn to_range(&self) -> SelectionRange {
        if self.is_empty {
            return SelectionRange::single(self.active_line.saturating_add(1));
        }

        let lowest = self.start_line.min(self.end_line).saturating_add(1);
        let highest = self.start_line.max(self.end_line).saturating_add(1);
        SelectionRange {
            start_line: lowest,
            end_line: highest,
        }
    }
}
