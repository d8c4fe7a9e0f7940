// Chunk: docs/chunks/binding_sync - Sync engine: translation, guard, lifecycle

//! The sync engine: consumes buffer-level change notifications, resolves
//! them through the binding registry, translates ranges into the
//! counterpart buffer's coordinate space, and applies the equivalent edit.
//!
//! Propagation is directionless: nothing special-cases "full edited" vs
//! "focused edited". Direction is resolved fresh per event from which
//! buffer the event names, and the translation is a pure line-number
//! shift — the two buffers disagree only on which absolute line number a
//! given row occupies, never on columns.
//!
//! Applying a translated edit raises a new change notification on the
//! target buffer. The engine suppresses that echo with a single
//! process-wide guard flag: at most one propagation is ever in flight
//! under serialized event delivery, so a per-binding guard would buy
//! nothing.

use crate::binding::{Binding, BindingRegistry, Direction, Resolution};
use crate::error::{EditError, FocusError};
use crate::host::EditorHost;
use crate::types::{BufferId, ChangeEvent, ContentChange, Edit, PlacementOptions};
use focus_split_buffer::{Position, Range};
use tracing::{debug, trace, warn};

/// Where a full-buffer change lies relative to the mirrored line span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanRelation {
    /// Entirely before the first mirrored character; the region content is
    /// untouched but the whole span shifts by the change's line delta.
    Above,
    /// Entirely within the mirrored lines; translated and propagated.
    Inside,
    /// Entirely after the last mirrored line; irrelevant to the binding.
    Below,
    /// Crosses a span boundary; the mirrored region is no longer
    /// well-defined.
    Straddles,
}

fn span_relation(range: &Range, span_start: usize, span_end: usize) -> SpanRelation {
    let span_top = Position::new(span_start, 0);
    // A deletion may end exactly at the span's first character without
    // touching it; an insertion at that position lands inside the region.
    if range.end < span_top || (range.end == span_top && !range.is_empty()) {
        return SpanRelation::Above;
    }
    if range.start.line > span_end {
        return SpanRelation::Below;
    }
    if range.start >= span_top && range.end.line <= span_end {
        return SpanRelation::Inside;
    }
    SpanRelation::Straddles
}

/// Shifts both line numbers of a range; columns never change.
fn shift_range(range: Range, delta: isize) -> Range {
    Range::from_coords(
        (range.start.line as isize + delta) as usize,
        range.start.col,
        (range.end.line as isize + delta) as usize,
        range.end.col,
    )
}

/// Classifies a sub-change into the edit primitive to apply at `range`.
fn to_edit(change: &ContentChange, range: Range) -> Edit {
    if change.text.is_empty() {
        // Empty replacement text means deletion of the range
        Edit {
            range,
            text: String::new(),
        }
    } else if change.range_len == 0 {
        // Nothing was replaced: a pure insertion at the range start
        Edit {
            range: Range::collapsed(range.start),
            text: change.text.clone(),
        }
    } else {
        Edit {
            range,
            text: change.text.clone(),
        }
    }
}

/// The binding synchronization engine.
///
/// Owns the registry of live bindings and the re-entrancy guard. One
/// instance per runtime session; handlers receive it explicitly rather
/// than reaching for module globals.
#[derive(Debug, Default)]
pub struct SyncEngine {
    registry: BindingRegistry,
    /// Set while a translated edit is being applied to a counterpart
    /// buffer; change notifications arriving in that window are echoes of
    /// our own write and are dropped.
    handling_change: bool,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self {
            registry: BindingRegistry::new(),
            handling_change: false,
        }
    }

    /// Read access to the live bindings (tests, status displays).
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.registry.iter()
    }

    pub fn binding_count(&self) -> usize {
        self.registry.len()
    }

    // ==================== Creation ====================

    /// Creates a binding mirroring lines `[line_start, line_end]` of
    /// `full` into a freshly opened focused buffer, and shows that buffer
    /// beside the source.
    ///
    /// `label` is used only for naming the new buffer (a function name
    /// when focusing a symbol, empty otherwise).
    pub fn create_binding(
        &mut self,
        host: &mut dyn EditorHost,
        full: BufferId,
        line_start: usize,
        line_end: usize,
        label: &str,
    ) -> Result<BufferId, FocusError> {
        if line_start > line_end {
            return Err(FocusError::InvalidLineSpan { line_start, line_end });
        }
        if self.registry.contains(full) {
            return Err(FocusError::AlreadyBound(full));
        }
        let text = host.text(full).ok_or(FocusError::UnknownBuffer(full))?;
        let (seed_start, _) = host
            .line_range(full, line_start)
            .ok_or(FocusError::InvalidLineSpan { line_start, line_end })?;
        let (_, seed_end) = host
            .line_range(full, line_end)
            .ok_or(FocusError::InvalidLineSpan { line_start, line_end })?;

        // Seed verbatim from the mirrored lines, trusting the source
        // buffer's own offset mapping for multi-byte content.
        let seed: String = text
            .chars()
            .skip(seed_start)
            .take(seed_end - seed_start)
            .collect();

        let focused = host.open_buffer(&seed, label);
        host.show(focused, &PlacementOptions::beside());

        self.registry.add(Binding {
            full,
            full_line_start: line_start,
            full_line_end: line_end,
            focused,
        });
        debug!(%full, %focused, line_start, line_end, "created binding");
        Ok(focused)
    }

    // ==================== Change propagation ====================

    /// Handles a change notification for some buffer.
    ///
    /// Changes in buffers with no binding are the common case and return
    /// silently. On apply failure the guard is still released and the
    /// error is returned; propagation for that event is abandoned and the
    /// two buffers may diverge until the next edit or severance.
    pub fn on_change(
        &mut self,
        host: &mut dyn EditorHost,
        event: &ChangeEvent,
    ) -> Result<(), EditError> {
        if self.handling_change {
            return Ok(());
        }
        if self.registry.is_empty() {
            return Ok(());
        }
        // Some hosts deliver the first event for a fresh buffer without a
        // payload; an event with zero sub-changes is a valid no-op.
        if event.changes.is_empty() {
            return Ok(());
        }

        let (index, direction) = match self.registry.resolve(event.buffer) {
            Resolution::Found { index, direction } => (index, direction),
            Resolution::NotFound => {
                trace!(buffer = %event.buffer, "change in unbound buffer");
                return Ok(());
            }
        };

        let binding = self.registry.get(index).expect("resolved index is live");
        let span_start = binding.full_line_start;
        let span_end = binding.full_line_end;
        let target = match direction {
            Direction::FullToFocused => binding.focused,
            Direction::FocusedToFull => binding.full,
        };

        // All sub-change ranges are pre-edit coordinates, so every
        // translation uses the pre-edit span; the span adjustment is
        // committed once at the end.
        let mut edits = Vec::with_capacity(event.changes.len());
        let mut start_delta: isize = 0;
        let mut end_delta: isize = 0;
        for change in &event.changes {
            match direction {
                Direction::FocusedToFull => {
                    // The focused buffer contains only the mirrored lines,
                    // so the change lies inside the span by construction.
                    let range = shift_range(change.range, span_start as isize);
                    edits.push(to_edit(change, range));
                    end_delta += change.line_delta();
                }
                Direction::FullToFocused => {
                    match span_relation(&change.range, span_start, span_end) {
                        SpanRelation::Above => {
                            start_delta += change.line_delta();
                            end_delta += change.line_delta();
                        }
                        SpanRelation::Below => {}
                        SpanRelation::Inside => {
                            let range = shift_range(change.range, -(span_start as isize));
                            edits.push(to_edit(change, range));
                            end_delta += change.line_delta();
                        }
                        SpanRelation::Straddles => {
                            debug!(
                                buffer = %event.buffer,
                                "edit straddles the focus region, severing binding"
                            );
                            let removed = self.registry.remove_at(index);
                            host.close(removed.focused);
                            return Ok(());
                        }
                    }
                }
            }
        }

        let outcome = if edits.is_empty() {
            Ok(())
        } else {
            debug!(source = %event.buffer, %target, edits = edits.len(), "propagating change");
            self.handling_change = true;
            let outcome = host.apply_edit(target, &edits);
            // The apply raises change notifications on the target; drain
            // them through the normal dispatch path while the guard is
            // still set so they cannot bounce back into the source. The
            // guard is released on success and failure alike.
            for echo in host.take_change_events() {
                let _ = self.on_change(host, &echo);
            }
            self.handling_change = false;
            if let Err(err) = &outcome {
                warn!(%target, error = %err, "propagation abandoned, buffers may diverge");
            }
            outcome
        };

        // A full-side change is already committed whether or not the
        // mirror edit landed; the span must keep describing it. A
        // focused-side change only moves the span if the full buffer
        // actually took the edit.
        let commit_span = match direction {
            Direction::FullToFocused => true,
            Direction::FocusedToFull => outcome.is_ok(),
        };
        if commit_span && (start_delta != 0 || end_delta != 0) {
            let binding = self.registry.get_mut(index).expect("resolved index is live");
            binding.full_line_start = (binding.full_line_start as isize + start_delta) as usize;
            binding.full_line_end = (binding.full_line_end as isize + end_delta) as usize;
        }

        outcome
    }

    // ==================== Lifecycle ====================

    /// Handles a buffer-closed notification.
    ///
    /// Closing the full side force-closes the focused side (foreground
    /// first, then close); closing the focused side just removes the
    /// binding. Unbound buffers are ignored, which also makes repeated
    /// close notifications harmless.
    pub fn on_buffer_closed(&mut self, host: &mut dyn EditorHost, buffer: BufferId) {
        let (index, direction) = match self.registry.resolve(buffer) {
            Resolution::Found { index, direction } => (index, direction),
            Resolution::NotFound => return,
        };

        let binding = self.registry.remove_at(index);
        match direction {
            Direction::FullToFocused => {
                // The permanent side went away: bring the focused view to
                // the foreground so the host drops any preview state, then
                // close it to avoid a dangling focus view.
                host.show(binding.focused, &PlacementOptions::foreground());
                host.close(binding.focused);
            }
            Direction::FocusedToFull => {
                assert!(
                    binding.focused == buffer,
                    "closed buffer matches neither side of its binding"
                );
            }
        }
        debug!(%buffer, "binding removed");
    }

    /// Reconciles the registry against the set of currently visible
    /// buffers.
    ///
    /// A binding whose full buffer is no longer visible has its focused
    /// buffer force-closed; a binding whose focused buffer is no longer
    /// visible is severed without closing anything else. Iteration runs in
    /// reverse creation order so index-based removal cannot skip entries.
    pub fn on_visible_set_changed(&mut self, host: &mut dyn EditorHost, visible: &[BufferId]) {
        for index in (0..self.registry.len()).rev() {
            let (full, focused) = {
                let binding = self.registry.get(index).expect("index in range");
                (binding.full, binding.focused)
            };
            let full_visible = visible.contains(&full);
            let focused_visible = visible.contains(&focused);
            if full_visible && focused_visible {
                continue;
            }
            if !full_visible {
                host.close(focused);
            }
            let removed = self.registry.remove_at(index);
            debug!(full = %removed.full, focused = %removed.focused, "binding severed by visibility change");
        }
    }
}
