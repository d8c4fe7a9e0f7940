// Chunk: docs/chunks/binding_sync - Crate root

//! Bidirectional mirroring of a line span between two buffers.
//!
//! A *binding* associates a contiguous line span of a persistent "full"
//! buffer with an independent "focused" buffer seeded with those lines.
//! The [`SyncEngine`] keeps the two in lockstep: edits to either side are
//! translated into the other's coordinate space and re-applied, echoes of
//! the engine's own writes are suppressed, and bindings are torn down when
//! either side closes or the edit stream makes the mirrored region
//! ill-defined.
//!
//! The engine owns no buffers and does no parsing. Editor capabilities
//! come in through the [`EditorHost`] trait; enclosing-function lookup for
//! the focus command comes in through [`StructureProvider`].

pub mod binding;
pub mod commands;
pub mod engine;
pub mod error;
pub mod host;
pub mod memory_host;
pub mod structure;
pub mod types;

pub use binding::{Binding, BindingRegistry, Direction, Resolution};
pub use commands::{focus_on_function, focus_on_selection};
pub use engine::SyncEngine;
pub use error::{EditError, FocusError};
pub use host::EditorHost;
pub use memory_host::MemoryHost;
pub use structure::{FunctionSymbol, StructureProvider};
pub use types::{BufferId, ChangeEvent, ContentChange, Edit, PlacementOptions};
