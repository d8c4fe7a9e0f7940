// Chunk: docs/chunks/binding_sync - Error types

//! Error types for binding creation and edit application.

use crate::types::BufferId;
use focus_split_buffer::RangeError;

/// Errors that can occur when creating a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    /// The requested line span is reversed or names lines the source
    /// buffer does not have. Violating this is a caller bug per the
    /// creation preconditions, but it is reported rather than asserted so
    /// a front end can surface it.
    InvalidLineSpan { line_start: usize, line_end: usize },
    /// The source buffer identity is not known to the host.
    UnknownBuffer(BufferId),
    /// The source buffer already participates in a binding; each buffer
    /// identity joins at most one binding at a time.
    AlreadyBound(BufferId),
}

impl std::fmt::Display for FocusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusError::InvalidLineSpan { line_start, line_end } => {
                write!(f, "invalid line span [{}, {}]", line_start, line_end)
            }
            FocusError::UnknownBuffer(id) => write!(f, "unknown buffer {}", id),
            FocusError::AlreadyBound(id) => write!(f, "{} is already part of a binding", id),
        }
    }
}

impl std::error::Error for FocusError {}

/// Errors that can occur while applying a multi-edit to a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The target buffer is not open in the host.
    UnknownBuffer(BufferId),
    /// An edit range does not exist in the target buffer.
    InvalidRange(RangeError),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::UnknownBuffer(id) => write!(f, "unknown buffer {}", id),
            EditError::InvalidRange(err) => write!(f, "invalid edit range: {}", err),
        }
    }
}

impl std::error::Error for EditError {}

impl From<RangeError> for EditError {
    fn from(err: RangeError) -> Self {
        EditError::InvalidRange(err)
    }
}
