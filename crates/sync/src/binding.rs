// Chunk: docs/chunks/binding_sync - Binding registry and direction resolution

//! The binding registry: which full↔focused associations are live, and
//! which one (if any) governs a change in a given buffer.
//!
//! Resolution is modeled as a result variant rather than an error:
//! most change events name buffers with no binding at all, and that is
//! the expected case, not a failure.

use crate::types::BufferId;

/// One active association between a line span of a full buffer and an
/// independent focused buffer mirroring that span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Identity of the full (persistent) buffer.
    pub full: BufferId,
    /// First mirrored line of the full buffer (0-based).
    pub full_line_start: usize,
    /// Last mirrored line of the full buffer (0-based, inclusive).
    /// Invariant: `full_line_start <= full_line_end`.
    pub full_line_end: usize,
    /// Identity of the focused buffer created at binding time.
    pub focused: BufferId,
}

/// Which way a change propagates, determined by which side of the binding
/// the changed buffer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The full buffer changed; the edit flows into the focused buffer.
    FullToFocused,
    /// The focused buffer changed; the edit flows into the full buffer.
    FocusedToFull,
}

/// Result of resolving a buffer identity against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The buffer is one side of the binding at `index`.
    Found { index: usize, direction: Direction },
    /// No binding involves this buffer. Expected and frequent; callers
    /// treat it as a silent no-op.
    NotFound,
}

/// Ordered collection of live bindings (order = creation order).
///
/// The registry only ever holds a handful of entries, so lookups are
/// linear scans; what matters is stable creation order and removal that
/// stays safe during reverse iteration.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    bindings: Vec<Binding>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Binding> {
        self.bindings.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Binding> {
        self.bindings.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Resolves which binding (if any) governs a change in `buffer`.
    ///
    /// The full side is scanned first, then the focused side. No side
    /// effects.
    pub fn resolve(&self, buffer: BufferId) -> Resolution {
        if let Some(index) = self.bindings.iter().position(|b| b.full == buffer) {
            return Resolution::Found {
                index,
                direction: Direction::FullToFocused,
            };
        }
        if let Some(index) = self.bindings.iter().position(|b| b.focused == buffer) {
            return Resolution::Found {
                index,
                direction: Direction::FocusedToFull,
            };
        }
        Resolution::NotFound
    }

    /// Returns true if `buffer` is either side of any binding.
    pub fn contains(&self, buffer: BufferId) -> bool {
        !matches!(self.resolve(buffer), Resolution::NotFound)
    }

    /// Appends a binding.
    ///
    /// The caller guarantees neither of the two buffer identities is
    /// already bound; the single creation path in the engine checks this.
    pub fn add(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Removes the binding at `index`, returning it.
    ///
    /// Safe to call while iterating indices in reverse: entries after
    /// `index` have already been visited, entries before it keep their
    /// positions.
    pub fn remove_at(&mut self, index: usize) -> Binding {
        self.bindings.remove(index)
    }

    /// Removes a binding by identity pair; idempotent no-op if absent.
    ///
    /// Returns true if a binding was removed.
    pub fn remove(&mut self, binding: &Binding) -> bool {
        match self
            .bindings
            .iter()
            .position(|b| b.full == binding.full && b.focused == binding.focused)
        {
            Some(index) => {
                self.bindings.remove(index);
                true
            }
            None => false,
        }
    }
}
