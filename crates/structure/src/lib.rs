// Chunk: docs/chunks/function_outline - Crate root

//! Language-aware function outlines for the focus command.
//!
//! This crate is the tree-sitter backed implementation of
//! `focus_split_sync::StructureProvider`: given a source text and a line,
//! it answers which function encloses that line, so a bare cursor can
//! focus its surrounding function. Seven languages are supported (Rust,
//! C, C++, JavaScript, TypeScript, Python, Go); adding one means adding a
//! grammar crate and an outline query to the registry.

pub mod outline;
pub mod registry;

pub use outline::FunctionOutline;
pub use registry::{LanguageConfig, LanguageRegistry};
