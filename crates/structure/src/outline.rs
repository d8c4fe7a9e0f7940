// Chunk: docs/chunks/function_outline - Tree-sitter backed function outline

//! Function outline extraction via tree-sitter.
//!
//! `FunctionOutline` compiles a language's outline query once and then
//! answers two questions about any source text: which functions does it
//! contain, and which function encloses a given line. The second is the
//! `StructureProvider` implementation the sync engine's focus command
//! consumes.
//!
//! Parsing happens per call against a throwaway tree. Outline lookups are
//! triggered by an explicit user gesture, not by every keystroke, so there
//! is nothing to gain from incremental reparsing here.

use focus_split_sync::{FunctionSymbol, StructureProvider};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor};

use crate::registry::{LanguageConfig, LanguageRegistry};

/// Extracts function symbols from source text in one language.
pub struct FunctionOutline {
    language: Language,
    /// The compiled outline query for direct QueryCursor usage
    query: Query,
    name_capture: u32,
    function_capture: u32,
}

impl FunctionOutline {
    /// Creates an outline for a language configuration.
    ///
    /// Returns `None` if the outline query does not compile against the
    /// language or lacks the `@name`/`@function` captures.
    pub fn new(config: &LanguageConfig) -> Option<Self> {
        let query = Query::new(&config.language, config.outline_query).ok()?;
        let name_capture = query.capture_index_for_name("name")?;
        let function_capture = query.capture_index_for_name("function")?;
        Some(Self {
            language: config.language.clone(),
            query,
            name_capture,
            function_capture,
        })
    }

    /// Convenience constructor from a file extension.
    pub fn for_extension(registry: &LanguageRegistry, ext: &str) -> Option<Self> {
        Self::new(registry.config_for_extension(ext)?)
    }

    /// Returns every function in `source`, ordered by starting line.
    ///
    /// Unparseable source yields an empty outline rather than an error;
    /// the caller cannot do anything smarter with a broken parse than with
    /// a fileful of prose.
    pub fn function_symbols(&self, source: &str) -> Vec<FunctionSymbol> {
        let mut parser = Parser::new();
        if parser.set_language(&self.language).is_err() {
            return Vec::new();
        }
        let tree = match parser.parse(source, None) {
            Some(tree) => tree,
            None => return Vec::new(),
        };

        let bytes = source.as_bytes();
        let mut cursor = QueryCursor::new();
        let mut symbols = Vec::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), bytes);
        while let Some(mat) = matches.next() {
            let mut name = None;
            let mut node = None;
            for capture in mat.captures {
                if capture.index == self.name_capture {
                    name = capture.node.utf8_text(bytes).ok().map(str::to_string);
                } else if capture.index == self.function_capture {
                    node = Some(capture.node);
                }
            }
            if let (Some(name), Some(node)) = (name, node) {
                symbols.push(FunctionSymbol {
                    name,
                    line_start: node.start_position().row,
                    line_end: node.end_position().row,
                });
            }
        }

        symbols.sort_by_key(|s| (s.line_start, s.line_end));
        symbols
    }
}

impl StructureProvider for FunctionOutline {
    /// Returns the innermost function containing `line` (the one with the
    /// smallest line span; nested definitions shadow their enclosers).
    fn enclosing_function(&self, source: &str, line: usize) -> Option<FunctionSymbol> {
        self.function_symbols(source)
            .into_iter()
            .filter(|s| s.contains_line(line))
            .min_by_key(|s| s.line_end - s.line_start)
    }
}
