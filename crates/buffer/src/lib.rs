// Chunk: docs/chunks/text_model - Line-indexed text buffer for range edits

//! focus-split-buffer: The text model for focus-split.
//!
//! This crate provides the coordinate types ([`Position`], [`Range`]) and a
//! line-indexed [`TextBuffer`] supporting whole-range replacement. It backs
//! the in-memory editor host and the test suites; the sync engine itself
//! only speaks to buffers through host capabilities and never touches this
//! type directly.
//!
//! # Example
//!
//! ```
//! use focus_split_buffer::{Position, Range, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("one\ntwo\nthree");
//! assert_eq!(buffer.line_count(), 3);
//! assert_eq!(buffer.line_content(1), "two");
//!
//! buffer.replace(Range::collapsed(Position::new(1, 0)), "X").unwrap();
//! assert_eq!(buffer.line_content(1), "Xtwo");
//! ```

mod line_index;
mod text_buffer;
mod types;

pub use line_index::LineIndex;
pub use text_buffer::{RangeError, TextBuffer};
pub use types::{Position, Range};
