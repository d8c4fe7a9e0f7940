// Chunk: docs/chunks/binding_sync - Buffer identity and change event types

//! Identity and event types shared across the sync engine.
//!
//! Buffer identity is an explicit comparable key rather than a reference:
//! some hosts hand back distinct handle objects for the same logical
//! buffer, so the registry must never rely on pointer equality.

use focus_split_buffer::Range;

/// Opaque, comparable identity of a buffer.
///
/// Handed out by the host when a buffer is opened; the registry keys all
/// lookups on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BufferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buffer#{}", self.0)
    }
}

/// One sub-change of a change event, in the buffer's pre-edit coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    /// The replaced range, in the coordinate space before the edit.
    pub range: Range,
    /// Character length of the replaced span (0 for a pure insertion).
    pub range_len: usize,
    /// The replacement text (empty for a deletion).
    pub text: String,
}

impl ContentChange {
    /// Net change in line count this edit caused in its buffer:
    /// newlines inserted minus lines joined by the deleted range.
    pub fn line_delta(&self) -> isize {
        let added = self.text.matches('\n').count() as isize;
        let removed = self.range.line_delta() as isize;
        added - removed
    }
}

/// An edit already committed to some buffer, as delivered by the host.
///
/// An event may bundle several disjoint sub-changes applied atomically.
/// Sub-changes are ordered so that applying them sequentially in event
/// order against the evolving buffer reproduces the edit (hosts emit
/// later-in-document changes first). A change event with zero sub-changes
/// is valid and means nothing happened; some hosts deliver one for a
/// freshly created buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The buffer the edit was applied to.
    pub buffer: BufferId,
    /// The individual sub-changes, in application order.
    pub changes: Vec<ContentChange>,
}

/// A single edit of an atomic multi-edit, in the target buffer's
/// coordinate space.
///
/// A collapsed range is a pure insertion; empty text is a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range,
    pub text: String,
}

/// Display placement passed through to the host unmodified.
///
/// The engine never interprets these flags; they mirror what the host's
/// show capability accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementOptions {
    /// Open in a split beside the current editor.
    pub beside: bool,
    /// Open as a preview (transient) editor.
    pub preview: bool,
    /// Keep focus on the current editor instead of the shown one.
    pub preserve_focus: bool,
}

impl PlacementOptions {
    /// Placement for a freshly created focused buffer: a persistent split
    /// beside the source editor.
    pub fn beside() -> Self {
        Self {
            beside: true,
            preview: false,
            preserve_focus: false,
        }
    }

    /// Placement used to bring a buffer to the foreground just before
    /// closing it.
    pub fn foreground() -> Self {
        Self {
            beside: false,
            preview: true,
            preserve_focus: false,
        }
    }
}
