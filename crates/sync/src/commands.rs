// Chunk: docs/chunks/binding_sync - User-facing focus commands

//! The entry points a front end wires to its "focus" gesture.
//!
//! A non-empty selection focuses exactly the selected lines. A collapsed
//! selection (a bare cursor) asks the structure provider for the enclosing
//! function and focuses that. Cases where there is simply nothing to focus
//! on resolve to `Ok(None)` rather than an error: the user aimed at
//! nothing, which is not a failure.

use crate::engine::SyncEngine;
use crate::error::FocusError;
use crate::host::EditorHost;
use crate::structure::{FunctionSymbol, StructureProvider};
use crate::types::BufferId;
use focus_split_buffer::Range;
use tracing::debug;

/// Focuses the line span of a named function, labeling the focused buffer
/// with the function's name.
pub fn focus_on_function(
    engine: &mut SyncEngine,
    host: &mut dyn EditorHost,
    buffer: BufferId,
    symbol: &FunctionSymbol,
) -> Result<BufferId, FocusError> {
    debug!(%buffer, name = %symbol.name, "focusing function");
    engine.create_binding(host, buffer, symbol.line_start, symbol.line_end, &symbol.name)
}

/// Focuses the current selection of `buffer`.
///
/// Returns `Ok(None)` when there is nothing to focus: zero or multiple
/// selections, or a collapsed selection outside any function the provider
/// knows about. Selections may be reversed (anchor after cursor); only
/// their line extent matters.
pub fn focus_on_selection(
    engine: &mut SyncEngine,
    host: &mut dyn EditorHost,
    provider: &dyn StructureProvider,
    buffer: BufferId,
    selections: &[Range],
) -> Result<Option<BufferId>, FocusError> {
    // The focused buffer can only mirror one contiguous span.
    let selection = match selections {
        [single] => *single,
        _ => return Ok(None),
    };

    if selection.is_empty() {
        let source = host.text(buffer).ok_or(FocusError::UnknownBuffer(buffer))?;
        match provider.enclosing_function(&source, selection.start.line) {
            Some(symbol) => focus_on_function(engine, host, buffer, &symbol).map(Some),
            None => Ok(None),
        }
    } else {
        let line_start = selection.start.line.min(selection.end.line);
        let line_end = selection.start.line.max(selection.end.line);
        engine
            .create_binding(host, buffer, line_start, line_end, "")
            .map(Some)
    }
}
