// Chunk: docs/chunks/editor_host - Host capability boundary

//! The capability boundary between the sync engine and its host editor.
//!
//! The engine never owns buffers. Everything it needs — reading text,
//! mapping lines to offsets, applying edits, opening and closing buffers —
//! is consumed through this trait, so the engine can run against a real
//! editor integration or the in-memory host used by tests and the demo
//! binary.

use crate::error::EditError;
use crate::types::{BufferId, ChangeEvent, Edit, PlacementOptions};

/// Editor capabilities consumed by the sync engine.
///
/// All offsets are character offsets in the host's own line/character
/// model; the engine never recomputes them.
pub trait EditorHost {
    /// Returns the full text of an open buffer, or `None` if the identity
    /// is unknown or the buffer has been closed.
    fn text(&self, buffer: BufferId) -> Option<String>;

    /// Returns the `(start_offset, end_offset)` character offsets of a
    /// line, excluding its trailing newline. `None` if the buffer or line
    /// does not exist.
    fn line_range(&self, buffer: BufferId, line: usize) -> Option<(usize, usize)>;

    /// Applies a multi-edit atomically: either every edit is applied or
    /// the buffer is left untouched.
    ///
    /// Edits are applied sequentially in the given order against the
    /// evolving buffer; callers order them so earlier edits do not
    /// invalidate the ranges of later ones.
    fn apply_edit(&mut self, buffer: BufferId, edits: &[Edit]) -> Result<(), EditError>;

    /// Drains the change notifications raised by `apply_edit` since the
    /// last call.
    ///
    /// The engine drains these while its re-entrancy guard is still set,
    /// which is how echoes of its own writes are kept from propagating
    /// again.
    fn take_change_events(&mut self) -> Vec<ChangeEvent>;

    /// Creates a new buffer seeded with `seed` and returns its identity.
    /// `label` is used only for naming.
    fn open_buffer(&mut self, seed: &str, label: &str) -> BufferId;

    /// Displays a buffer. The placement flags are passed through
    /// unmodified; the engine attaches no meaning to them.
    fn show(&mut self, buffer: BufferId, options: &PlacementOptions);

    /// Closes a buffer. Closing an unknown or already-closed buffer is a
    /// no-op.
    fn close(&mut self, buffer: BufferId);
}
