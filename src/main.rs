// Chunk: docs/chunks/focus_split - Scripted demo binary

//! focus-split demo: walks one binding through its whole life against the
//! in-memory host.
//!
//! Opens a JavaScript buffer, focuses the function under a cursor, edits
//! both sides, shifts the span with an edit above it, and finally closes
//! the full buffer to show the teardown. Run with
//! `RUST_LOG=focus_split_sync=debug` to see the engine's decisions.

use focus_split::{
    focus_on_selection, BufferId, EditorHost, FunctionOutline, LanguageRegistry, MemoryHost,
    Position, Range, SyncEngine,
};

const SAMPLE: &str = "\
function header() {
  return 'banner';
}

function compute(a, b) {
  const sum = a + b;
  return sum * 2;
}
";

fn dump(host: &MemoryHost, step: &str, buffers: &[(&str, BufferId)]) {
    println!("== {} ==", step);
    for (name, id) in buffers {
        match host.text(*id) {
            Some(text) => {
                println!("--- {} ---", name);
                for (index, line) in text.split('\n').enumerate() {
                    println!("{:>3} | {}", index, line);
                }
            }
            None => println!("--- {} --- (closed)", name),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = LanguageRegistry::new();
    let config = registry
        .config_for_language_name("javascript")
        .ok_or("javascript outline unavailable")?;
    let provider = FunctionOutline::new(config).ok_or("outline query failed to compile")?;

    let mut host = MemoryHost::new();
    let mut engine = SyncEngine::new();
    let full = host.open_buffer(SAMPLE, "sample.js");

    // Bare cursor inside `compute`; the outline picks the span to focus.
    let cursor = Range::collapsed(Position::new(5, 4));
    let focused = focus_on_selection(&mut engine, &mut host, &provider, full, &[cursor])?
        .ok_or("cursor is not inside a function")?;
    dump(&host, "focused `compute`", &[("full", full), ("focused", focused)]);

    // Edit the focused side: the change lands on the matching full line.
    let event = host.edit(
        focused,
        Range::collapsed(Position::new(1, 2)),
        "if (a === b) return 0;\n  ",
    )?;
    engine.on_change(&mut host, &event)?;
    dump(&host, "edited focused buffer", &[("full", full), ("focused", focused)]);

    // Edit the full side above the span: nothing propagates, the span
    // just slides down.
    let event = host.edit(
        full,
        Range::collapsed(Position::new(0, 0)),
        "// sample program\n",
    )?;
    engine.on_change(&mut host, &event)?;
    let binding = engine.bindings().next().ok_or("binding disappeared")?;
    println!(
        "span after prologue insert: lines {}..={}\n",
        binding.full_line_start, binding.full_line_end
    );

    // Close the full buffer; the focused view has nothing left to mirror.
    host.close(full);
    engine.on_buffer_closed(&mut host, full);
    dump(&host, "closed full buffer", &[("full", full), ("focused", focused)]);
    println!("live bindings: {}", engine.binding_count());

    Ok(())
}
