// Chunk: docs/chunks/focus_split - Facade crate

//! focus-split: mirror a line span of a buffer into a focused side buffer.
//!
//! This facade re-exports the three workspace crates so integrations can
//! depend on one name: the text model (`focus-split-buffer`), the sync
//! engine (`focus-split-sync`), and the tree-sitter outline provider
//! (`focus-split-structure`).

pub use focus_split_buffer::{LineIndex, Position, Range, RangeError, TextBuffer};
pub use focus_split_structure::{FunctionOutline, LanguageConfig, LanguageRegistry};
pub use focus_split_sync::{
    focus_on_function, focus_on_selection, Binding, BindingRegistry, BufferId, ChangeEvent,
    ContentChange, Direction, Edit, EditError, EditorHost, FocusError, FunctionSymbol, MemoryHost,
    PlacementOptions, Resolution, StructureProvider, SyncEngine,
};
