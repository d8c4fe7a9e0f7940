// Chunk: docs/chunks/binding_sync - Structure provider boundary

//! The seam between the sync engine and language-aware structure lookup.
//!
//! The engine only ever needs one question answered: "which function
//! encloses this line?". Everything about parsing lives behind this trait
//! so the core crate carries no parser dependency; the tree-sitter backed
//! implementation lives in `focus-split-structure`.

/// A function-like symbol found in a source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    /// The function's name, used to label the focused buffer.
    pub name: String,
    /// First line of the function (0-based, inclusive).
    pub line_start: usize,
    /// Last line of the function (0-based, inclusive).
    pub line_end: usize,
}

impl FunctionSymbol {
    pub fn contains_line(&self, line: usize) -> bool {
        self.line_start <= line && line <= self.line_end
    }
}

/// Answers enclosing-function queries for a source text.
pub trait StructureProvider {
    /// Returns the innermost function whose line span contains `line`, or
    /// `None` if the line is outside every function or the source cannot
    /// be parsed.
    fn enclosing_function(&self, source: &str, line: usize) -> Option<FunctionSymbol>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_line_is_inclusive_both_ends() {
        let symbol = FunctionSymbol {
            name: "f".to_string(),
            line_start: 2,
            line_end: 5,
        };
        assert!(!symbol.contains_line(1));
        assert!(symbol.contains_line(2));
        assert!(symbol.contains_line(5));
        assert!(!symbol.contains_line(6));
    }
}
