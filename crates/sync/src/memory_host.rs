// Chunk: docs/chunks/editor_host - In-memory host for tests and the demo

//! An in-memory `EditorHost` backed by `focus-split-buffer`.
//!
//! Buffers live in a vector keyed by `BufferId`; closing a buffer marks it
//! closed but keeps the slot so identities are never reused. `apply_edit`
//! raises echo change events exactly the way a real host would, which is
//! what lets tests exercise the engine's re-entrancy guard.

use crate::error::EditError;
use crate::host::EditorHost;
use crate::types::{BufferId, ChangeEvent, ContentChange, Edit, PlacementOptions};
use focus_split_buffer::{Range, TextBuffer};

/// One hosted buffer.
#[derive(Debug)]
struct HostBuffer {
    id: BufferId,
    label: String,
    text: TextBuffer,
    open: bool,
}

/// In-memory editor host.
#[derive(Debug, Default)]
pub struct MemoryHost {
    buffers: Vec<HostBuffer>,
    next_id: u64,
    /// Echo events raised by `apply_edit`, pending delivery.
    pending: Vec<ChangeEvent>,
    /// Log of `show` calls, oldest first (for assertions).
    shown: Vec<(BufferId, PlacementOptions)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, buffer: BufferId) -> Option<&HostBuffer> {
        self.buffers.iter().find(|b| b.id == buffer && b.open)
    }

    fn slot_mut(&mut self, buffer: BufferId) -> Option<&mut HostBuffer> {
        self.buffers.iter_mut().find(|b| b.id == buffer && b.open)
    }

    /// Applies an edit as if the user typed it, returning the change event
    /// the host would deliver for it.
    ///
    /// `range` is in pre-edit coordinates. The caller forwards the event to
    /// the engine, mimicking the host runtime's notification delivery.
    pub fn edit(
        &mut self,
        buffer: BufferId,
        range: Range,
        text: &str,
    ) -> Result<ChangeEvent, EditError> {
        let slot = self.slot_mut(buffer).ok_or(EditError::UnknownBuffer(buffer))?;
        let start = slot.text.position_to_offset(range.start)?;
        let end = slot.text.position_to_offset(range.end)?;
        slot.text.replace(range, text)?;
        Ok(ChangeEvent {
            buffer,
            changes: vec![ContentChange {
                range,
                range_len: end - start,
                text: text.to_string(),
            }],
        })
    }

    /// Returns whether a buffer is currently open.
    pub fn is_open(&self, buffer: BufferId) -> bool {
        self.slot(buffer).is_some()
    }

    /// Returns the label a buffer was opened with, if it is open.
    pub fn label(&self, buffer: BufferId) -> Option<&str> {
        self.slot(buffer).map(|b| b.label.as_str())
    }

    /// Identities of all open buffers, in creation order.
    pub fn open_buffers(&self) -> Vec<BufferId> {
        self.buffers.iter().filter(|b| b.open).map(|b| b.id).collect()
    }

    /// The `show` calls made so far, oldest first.
    pub fn shown(&self) -> &[(BufferId, PlacementOptions)] {
        &self.shown
    }
}

impl EditorHost for MemoryHost {
    fn text(&self, buffer: BufferId) -> Option<String> {
        self.slot(buffer).map(|b| b.text.content().to_string())
    }

    fn line_range(&self, buffer: BufferId, line: usize) -> Option<(usize, usize)> {
        self.slot(buffer)?.text.line_range(line)
    }

    fn apply_edit(&mut self, buffer: BufferId, edits: &[Edit]) -> Result<(), EditError> {
        let slot = self.slot_mut(buffer).ok_or(EditError::UnknownBuffer(buffer))?;

        // Apply against a scratch copy first so a bad range mid-way leaves
        // the buffer untouched (the multi-edit is atomic).
        let mut scratch = slot.text.clone();
        let mut changes = Vec::with_capacity(edits.len());
        for edit in edits {
            let start = scratch.position_to_offset(edit.range.start)?;
            let end = scratch.position_to_offset(edit.range.end)?;
            scratch.replace(edit.range, &edit.text)?;
            changes.push(ContentChange {
                range: edit.range,
                range_len: end - start,
                text: edit.text.clone(),
            });
        }
        slot.text = scratch;

        if !changes.is_empty() {
            self.pending.push(ChangeEvent { buffer, changes });
        }
        Ok(())
    }

    fn take_change_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.pending)
    }

    fn open_buffer(&mut self, seed: &str, label: &str) -> BufferId {
        let id = BufferId::new(self.next_id);
        self.next_id += 1;
        self.buffers.push(HostBuffer {
            id,
            label: label.to_string(),
            text: TextBuffer::from_str(seed),
            open: true,
        });
        id
    }

    fn show(&mut self, buffer: BufferId, options: &PlacementOptions) {
        self.shown.push((buffer, *options));
    }

    fn close(&mut self, buffer: BufferId) {
        if let Some(slot) = self.buffers.iter_mut().find(|b| b.id == buffer) {
            slot.open = false;
        }
    }
}
