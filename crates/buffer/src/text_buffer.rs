// Chunk: docs/chunks/text_model - TextBuffer with range replacement

//! TextBuffer is the main public API of the text model.
//!
//! It combines string storage with a line index (for O(1) line count and
//! cheap line access) and exposes the operations the sync host needs:
//! position/offset mapping, line-span extraction, and range replacement.
//!
//! Unlike an interactive editing buffer there is no cursor and no
//! per-keystroke mutation path; every edit arrives as a whole range
//! replacement, so the line index is rebuilt after each mutation instead
//! of patched incrementally.

use crate::line_index::LineIndex;
use crate::types::{Position, Range};

/// Error returned when a position or range does not exist in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The line index is past the end of the buffer.
    LineOutOfBounds { line: usize, line_count: usize },
    /// The column is past the end of its line.
    ColumnOutOfBounds { line: usize, col: usize, line_len: usize },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::LineOutOfBounds { line, line_count } => {
                write!(f, "line {} out of bounds (buffer has {} lines)", line, line_count)
            }
            RangeError::ColumnOutOfBounds { line, col, line_len } => {
                write!(f, "column {} out of bounds on line {} (line length {})", col, line, line_len)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// A line-indexed text buffer supporting range replacement.
///
/// Offsets and columns count characters, not bytes; multi-byte characters
/// occupy a single column. The byte translation happens internally.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    content: String,
    line_index: LineIndex,
    /// Cached character count of `content`.
    char_len: usize,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self {
            content: String::new(),
            line_index: LineIndex::new(),
            char_len: 0,
        }
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// Note: We don't implement `FromStr` because it requires returning
    /// `Result`, but parsing a string into a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut line_index = LineIndex::new();
        line_index.rebuild(content.chars());

        Self {
            content: content.to_string(),
            line_index,
            char_len: content.chars().count(),
        }
    }

    // ==================== Accessors ====================

    /// Returns the entire buffer content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the total character count in the buffer.
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// Always at least 1 (even for an empty buffer).
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the content of the specified line, without its newline.
    ///
    /// Returns an empty string if the line index is out of bounds.
    pub fn line_content(&self, line: usize) -> &str {
        match self.line_range(line) {
            Some((start, end)) => self.slice(start, end),
            None => "",
        }
    }

    /// Returns the length of the specified line in characters (excluding the
    /// newline), or 0 if the line is out of bounds.
    pub fn line_len(&self, line: usize) -> usize {
        self.line_index.line_len(line, self.char_len).unwrap_or(0)
    }

    /// Returns the `(start_offset, end_offset)` character offsets of a line.
    ///
    /// The end offset excludes the trailing newline. Returns `None` if the
    /// line is out of bounds.
    pub fn line_range(&self, line: usize) -> Option<(usize, usize)> {
        let start = self.line_index.line_start(line)?;
        let end = self.line_index.line_end(line, self.char_len)?;
        Some((start, end))
    }

    /// Returns the text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let byte_start = self.char_to_byte(start);
        let byte_end = self.char_to_byte(end);
        &self.content[byte_start..byte_end]
    }

    /// Returns the text from the start of `start_line` to the end of
    /// `end_line` (inclusive), without the trailing newline.
    ///
    /// Returns `None` if either line is out of bounds or the span is
    /// reversed.
    pub fn line_span_text(&self, start_line: usize, end_line: usize) -> Option<&str> {
        if start_line > end_line {
            return None;
        }
        let (start, _) = self.line_range(start_line)?;
        let (_, end) = self.line_range(end_line)?;
        Some(self.slice(start, end))
    }

    // ==================== Position Mapping ====================

    /// Converts a (line, col) position to a character offset.
    ///
    /// The column may equal the line length (the position just past the last
    /// character, where an insertion at end-of-line lands).
    pub fn position_to_offset(&self, pos: Position) -> Result<usize, RangeError> {
        let line_count = self.line_count();
        let start = self
            .line_index
            .line_start(pos.line)
            .ok_or(RangeError::LineOutOfBounds { line: pos.line, line_count })?;
        let line_len = self.line_len(pos.line);
        if pos.col > line_len {
            return Err(RangeError::ColumnOutOfBounds {
                line: pos.line,
                col: pos.col,
                line_len,
            });
        }
        Ok(start + pos.col)
    }

    /// Converts a character offset to a (line, col) position.
    ///
    /// Offsets past the end of the buffer map to the end position.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_len);
        let line = self.line_index.line_at_offset(offset);
        let line_start = self.line_index.line_start(line).unwrap_or(0);
        Position::new(line, offset - line_start)
    }

    // ==================== Mutation ====================

    /// Replaces the text in `range` with `text`.
    ///
    /// A collapsed range is a pure insertion; empty `text` is a deletion.
    /// The range is validated against the pre-edit buffer; on error the
    /// buffer is left unchanged.
    pub fn replace(&mut self, range: Range, text: &str) -> Result<(), RangeError> {
        let start = self.position_to_offset(range.start)?;
        let end = self.position_to_offset(range.end)?;
        debug_assert!(start <= end, "range must be in document order");

        let byte_start = self.char_to_byte(start);
        let byte_end = self.char_to_byte(end);
        self.content.replace_range(byte_start..byte_end, text);

        self.char_len = self.char_len - (end - start) + text.chars().count();
        self.line_index.rebuild(self.content.chars());
        Ok(())
    }

    /// Converts a character offset to a byte offset into `content`.
    fn char_to_byte(&self, char_offset: usize) -> usize {
        if char_offset >= self.char_len {
            return self.content.len();
        }
        self.content
            .char_indices()
            .nth(char_offset)
            .map(|(b, _)| b)
            .unwrap_or(self.content.len())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Accessors ====================

    #[test]
    fn test_empty_buffer() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.content(), "");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_line_content() {
        let buffer = TextBuffer::from_str("alpha\nbeta\ngamma");
        assert_eq!(buffer.line_content(0), "alpha");
        assert_eq!(buffer.line_content(1), "beta");
        assert_eq!(buffer.line_content(2), "gamma");
        assert_eq!(buffer.line_content(3), "");
    }

    #[test]
    fn test_line_range() {
        let buffer = TextBuffer::from_str("ab\ncd");
        assert_eq!(buffer.line_range(0), Some((0, 2)));
        assert_eq!(buffer.line_range(1), Some((3, 5)));
        assert_eq!(buffer.line_range(2), None);
    }

    #[test]
    fn test_line_span_text() {
        let buffer = TextBuffer::from_str("L0\nL1\nL2\nL3\nL4");
        assert_eq!(buffer.line_span_text(1, 3), Some("L1\nL2\nL3"));
        assert_eq!(buffer.line_span_text(0, 0), Some("L0"));
        assert_eq!(buffer.line_span_text(3, 1), None);
        assert_eq!(buffer.line_span_text(4, 5), None);
    }

    // ==================== Position Mapping ====================

    #[test]
    fn test_position_to_offset() {
        let buffer = TextBuffer::from_str("ab\ncd");
        assert_eq!(buffer.position_to_offset(Position::new(0, 0)), Ok(0));
        assert_eq!(buffer.position_to_offset(Position::new(0, 2)), Ok(2)); // end of line 0
        assert_eq!(buffer.position_to_offset(Position::new(1, 1)), Ok(4));
        assert!(buffer.position_to_offset(Position::new(0, 3)).is_err());
        assert!(buffer.position_to_offset(Position::new(2, 0)).is_err());
    }

    #[test]
    fn test_offset_to_position_round_trip() {
        let buffer = TextBuffer::from_str("ab\ncd\nef");
        for offset in 0..buffer.len() {
            let pos = buffer.offset_to_position(offset);
            assert_eq!(buffer.position_to_offset(pos), Ok(offset));
        }
    }

    // ==================== Mutation ====================

    #[test]
    fn test_insert_at_start_of_line() {
        let mut buffer = TextBuffer::from_str("one\ntwo");
        buffer
            .replace(Range::collapsed(Position::new(1, 0)), "X")
            .unwrap();
        assert_eq!(buffer.content(), "one\nXtwo");
    }

    #[test]
    fn test_delete_line_content() {
        let mut buffer = TextBuffer::from_str("one\ntwo\nthree");
        buffer
            .replace(Range::from_coords(1, 0, 1, 3), "")
            .unwrap();
        assert_eq!(buffer.content(), "one\n\nthree");
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn test_replace_across_lines() {
        let mut buffer = TextBuffer::from_str("one\ntwo\nthree");
        buffer
            .replace(Range::from_coords(0, 1, 2, 2), "-")
            .unwrap();
        assert_eq!(buffer.content(), "o-ree");
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_insert_newline_updates_line_count() {
        let mut buffer = TextBuffer::from_str("oneline");
        buffer
            .replace(Range::collapsed(Position::new(0, 3)), "\n")
            .unwrap();
        assert_eq!(buffer.content(), "one\nline");
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_replace_multibyte() {
        let mut buffer = TextBuffer::from_str("héllo\nwörld");
        // Columns are characters: 'é' is one column.
        buffer
            .replace(Range::from_coords(0, 1, 0, 2), "e")
            .unwrap();
        assert_eq!(buffer.content(), "hello\nwörld");

        buffer
            .replace(Range::collapsed(Position::new(1, 2)), "ß")
            .unwrap();
        assert_eq!(buffer.content(), "hello\nwößrld");
        assert_eq!(buffer.line_len(1), 6);
    }

    #[test]
    fn test_replace_invalid_range_leaves_buffer_unchanged() {
        let mut buffer = TextBuffer::from_str("abc");
        let err = buffer.replace(Range::from_coords(0, 0, 5, 0), "x");
        assert!(err.is_err());
        assert_eq!(buffer.content(), "abc");
    }

    #[test]
    fn test_delete_everything() {
        let mut buffer = TextBuffer::from_str("a\nb\nc");
        buffer
            .replace(Range::from_coords(0, 0, 2, 1), "")
            .unwrap();
        assert_eq!(buffer.content(), "");
        assert_eq!(buffer.line_count(), 1);
    }
}
