// Chunk: docs/chunks/text_model - Line index for O(1) line access

//! Line index for tracking line boundaries in the text buffer.
//!
//! Maintains an array of line start offsets for O(1) line count and O(log n)
//! lookup of which line contains a given offset. Offsets are character
//! offsets, matching the column units used by `Position`.

/// Tracks line boundaries in a text buffer.
///
/// The line index maintains a list of character offsets where each line starts.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the line index from the given content.
    ///
    /// O(n) in the content length. Range replacements can splice lines
    /// anywhere in the buffer, so the index is rebuilt after each mutation
    /// rather than patched incrementally.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines in the buffer.
    ///
    /// A buffer always has at least one line (even if empty).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the character offset where the given line starts.
    ///
    /// Returns None if the line index is out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the character offset of the end of the given line.
    ///
    /// For all lines except the last, this points to the newline character.
    /// For the last line, this equals the total buffer length.
    ///
    /// `total_len` is the total number of characters in the buffer.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            // Not the last line: end is the start of the next line minus 1 (the newline)
            Some(self.line_starts[line + 1] - 1)
        } else {
            // Last line: end is the buffer length
            Some(total_len)
        }
    }

    /// Returns the length of the given line (excluding the newline character).
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line, total_len)?;
        Some(end - start)
    }

    /// Returns the line number containing the given character offset.
    ///
    /// Uses binary search for O(log n) lookup.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_rebuild_empty() {
        let mut index = LineIndex::new();
        index.rebuild("".chars());
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_rebuild_multiple_lines() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld\n".chars());
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(6)); // After "hello\n"
        assert_eq!(index.line_start(2), Some(12)); // After "world\n"
    }

    #[test]
    fn test_line_end() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld".chars());
        assert_eq!(index.line_end(0, 11), Some(5)); // "hello" ends at 5 (before \n)
        assert_eq!(index.line_end(1, 11), Some(11)); // "world" ends at 11
    }

    #[test]
    fn test_line_len() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld".chars());
        assert_eq!(index.line_len(0, 11), Some(5));
        assert_eq!(index.line_len(1, 11), Some(5));
    }

    #[test]
    fn test_line_at_offset() {
        let mut index = LineIndex::new();
        index.rebuild("hello\nworld\nfoo".chars());

        assert_eq!(index.line_at_offset(0), 0); // 'h'
        assert_eq!(index.line_at_offset(5), 0); // '\n'
        assert_eq!(index.line_at_offset(6), 1); // 'w'
        assert_eq!(index.line_at_offset(12), 2); // 'f'
    }

    #[test]
    fn test_out_of_bounds_line() {
        let index = LineIndex::new();
        assert_eq!(index.line_start(1), None);
        assert_eq!(index.line_end(1, 0), None);
    }
}
