// Chunk: docs/chunks/text_model - Position and Range coordinate types

/// Position in a buffer as (line, column) where both are 0-indexed.
///
/// Columns count characters, not bytes; the owning buffer performs the
/// character-to-byte translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// A half-open range `[start, end)` of buffer positions.
///
/// `start <= end` always holds for ranges produced by this crate; callers
/// constructing ranges by hand are expected to keep them in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Builds a range from raw (line, col) pairs.
    pub fn from_coords(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// A zero-width range at `pos` (used for pure insertions).
    pub fn collapsed(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    /// Returns true if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of lines the range spans minus one (0 for a single-line range).
    pub fn line_delta(&self) -> usize {
        self.end.line - self.start.line
    }
}
