// Chunk: docs/chunks/focus_split - End-to-end smoke test
//!
//! Smoke test for the full focus-split pipeline: tree-sitter outline →
//! focus command → sync engine → in-memory host. Each test drives a
//! binding through a realistic slice of its life instead of poking one
//! layer in isolation.

use focus_split::{
    focus_on_selection, EditorHost, FunctionOutline, LanguageRegistry, MemoryHost, Position, Range,
    SyncEngine, TextBuffer,
};

const SAMPLE_JS: &str = "\
function header() {
  return 'banner';
}

function compute(a, b) {
  const sum = a + b;
  return sum * 2;
}
";

fn javascript_outline() -> FunctionOutline {
    let registry = LanguageRegistry::new();
    FunctionOutline::for_extension(&registry, "js").expect("javascript is supported")
}

/// Asserts the focused buffer still mirrors its span of the full buffer.
fn assert_mirrored(engine: &SyncEngine, host: &MemoryHost) {
    for binding in engine.bindings() {
        let full_text = host.text(binding.full).expect("full buffer open");
        let model = TextBuffer::from_str(&full_text);
        let expected = model
            .line_span_text(binding.full_line_start, binding.full_line_end)
            .expect("span within full buffer")
            .to_string();
        assert_eq!(host.text(binding.focused), Some(expected));
    }
}

/// Test the whole path: a bare cursor focuses its enclosing function,
/// edits flow both ways, and closing the full buffer tears it all down.
#[test]
fn test_focus_function_edit_both_sides_then_teardown() {
    let provider = javascript_outline();
    let mut host = MemoryHost::new();
    let mut engine = SyncEngine::new();
    let full = host.open_buffer(SAMPLE_JS, "sample.js");

    // Cursor inside `compute` (line 5); the outline supplies span and label
    let cursor = Range::collapsed(Position::new(5, 4));
    let focused = focus_on_selection(&mut engine, &mut host, &provider, full, &[cursor])
        .expect("focus succeeds")
        .expect("cursor is inside a function");

    assert_eq!(host.label(focused), Some("compute"));
    assert_eq!(
        host.text(focused),
        Some("function compute(a, b) {\n  const sum = a + b;\n  return sum * 2;\n}".to_string())
    );
    assert_mirrored(&engine, &host);

    // Focused → full
    let event = host
        .edit(focused, Range::collapsed(Position::new(2, 2)), "// doubled\n  ")
        .expect("edit applies");
    engine.on_change(&mut host, &event).expect("propagates");
    assert!(host.text(full).expect("open").contains("// doubled"));
    assert_mirrored(&engine, &host);

    // Full → focused, inside the span (which now ends one line lower)
    let event = host
        .edit(full, Range::collapsed(Position::new(4, 16)), "e")
        .expect("edit applies");
    engine.on_change(&mut host, &event).expect("propagates");
    assert!(host.text(focused).expect("open").contains("computee"));
    assert_mirrored(&engine, &host);

    // Closing the full side force-closes the focused side
    host.close(full);
    engine.on_buffer_closed(&mut host, full);
    assert!(!host.is_open(focused));
    assert_eq!(engine.binding_count(), 0);
}

/// Test that a multi-line selection focuses exactly the selected lines and
/// an edit above the span only shifts the binding.
#[test]
fn test_selection_focus_survives_edits_above_the_span() {
    let provider = javascript_outline();
    let mut host = MemoryHost::new();
    let mut engine = SyncEngine::new();
    let full = host.open_buffer(SAMPLE_JS, "sample.js");

    // Select the body of `compute` (lines 5-6)
    let selection = Range::from_coords(5, 0, 6, 5);
    let focused = focus_on_selection(&mut engine, &mut host, &provider, full, &[selection])
        .expect("focus succeeds")
        .expect("selection is focusable");
    assert_eq!(
        host.text(focused),
        Some("  const sum = a + b;\n  return sum * 2;".to_string())
    );

    // Insert a line above the span
    let event = host
        .edit(full, Range::collapsed(Position::new(3, 0)), "// gap\n")
        .expect("edit applies");
    engine.on_change(&mut host, &event).expect("handled");

    let binding = engine.bindings().next().expect("binding is live");
    assert_eq!(binding.full_line_start, 6);
    assert_eq!(binding.full_line_end, 7);
    assert_mirrored(&engine, &host);

    // The focused side still routes edits to the right (shifted) lines
    let event = host
        .edit(focused, Range::collapsed(Position::new(0, 2)), "let total = sum; ")
        .expect("edit applies");
    engine.on_change(&mut host, &event).expect("propagates");
    let full_text = host.text(full).expect("open");
    let lines: Vec<&str> = full_text.split('\n').collect();
    assert_eq!(lines[6], "  let total = sum; const sum = a + b;");
    assert_mirrored(&engine, &host);
}

/// Test that a cursor outside every function focuses nothing.
#[test]
fn test_cursor_in_gap_focuses_nothing() {
    let provider = javascript_outline();
    let mut host = MemoryHost::new();
    let mut engine = SyncEngine::new();
    let full = host.open_buffer(SAMPLE_JS, "sample.js");

    // Line 3 is the blank line between the two functions
    let cursor = Range::collapsed(Position::new(3, 0));
    let result = focus_on_selection(&mut engine, &mut host, &provider, full, &[cursor])
        .expect("command succeeds");
    assert_eq!(result, None);
    assert_eq!(engine.binding_count(), 0);
    assert_eq!(host.open_buffers(), vec![full]);
}

/// Test that hiding the full buffer severs the binding and closes the
/// focused view.
#[test]
fn test_hiding_full_buffer_closes_focused_view() {
    let provider = javascript_outline();
    let mut host = MemoryHost::new();
    let mut engine = SyncEngine::new();
    let full = host.open_buffer(SAMPLE_JS, "sample.js");

    let cursor = Range::collapsed(Position::new(1, 0));
    let focused = focus_on_selection(&mut engine, &mut host, &provider, full, &[cursor])
        .expect("focus succeeds")
        .expect("cursor is inside `header`");
    assert_eq!(host.label(focused), Some("header"));

    // The full buffer leaves the visible set
    engine.on_visible_set_changed(&mut host, &[focused]);
    assert!(!host.is_open(focused));
    assert_eq!(engine.binding_count(), 0);
}
