// Chunk: docs/chunks/function_outline - Language registry for outline queries

//! Language registry mapping file extensions to tree-sitter configurations.
//!
//! Each supported language pairs its tree-sitter `Language` with an
//! *outline query*: a query whose matches capture a `@function` node (the
//! whole definition, giving the line span) and a `@name` node (the
//! identifier used to label focused buffers).

use std::collections::HashMap;
use tree_sitter::Language;

const RUST_OUTLINE_QUERY: &str = r#"
(function_item name: (identifier) @name) @function
"#;

const C_OUTLINE_QUERY: &str = r#"
(function_definition
  declarator: (function_declarator declarator: (identifier) @name)) @function
"#;

// C++ declarator heads vary (plain identifiers, qualified names,
// destructors), so the name capture is left open.
const CPP_OUTLINE_QUERY: &str = r#"
(function_definition
  declarator: (function_declarator declarator: (_) @name)) @function
"#;

const JAVASCRIPT_OUTLINE_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @function
(generator_function_declaration name: (identifier) @name) @function
(method_definition name: (property_identifier) @name) @function
(variable_declarator
  name: (identifier) @name
  value: (arrow_function)) @function
"#;

const PYTHON_OUTLINE_QUERY: &str = r#"
(function_definition name: (identifier) @name) @function
"#;

const GO_OUTLINE_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @function
(method_declaration name: (field_identifier) @name) @function
"#;

/// Configuration for a language's function outline.
#[derive(Clone)]
pub struct LanguageConfig {
    /// The tree-sitter language
    pub language: Language,
    /// The outline query (tree-sitter query syntax) capturing `@function`
    /// and `@name`
    pub outline_query: &'static str,
}

impl LanguageConfig {
    pub fn new(language: Language, outline_query: &'static str) -> Self {
        Self {
            language,
            outline_query,
        }
    }
}

/// Registry mapping file extensions to language configurations.
///
/// Supports 7 languages: Rust, C, C++, JavaScript, TypeScript, Python,
/// and Go.
pub struct LanguageRegistry {
    /// Map from extension (without leading dot) to language config
    configs: HashMap<&'static str, LanguageConfig>,
}

impl LanguageRegistry {
    /// Creates a new language registry with all supported languages.
    pub fn new() -> Self {
        let mut configs = HashMap::new();

        let rust_config =
            LanguageConfig::new(tree_sitter_rust::LANGUAGE.into(), RUST_OUTLINE_QUERY);
        configs.insert("rs", rust_config);

        let c_config = LanguageConfig::new(tree_sitter_c::LANGUAGE.into(), C_OUTLINE_QUERY);
        configs.insert("c", c_config);

        let cpp_config = LanguageConfig::new(tree_sitter_cpp::LANGUAGE.into(), CPP_OUTLINE_QUERY);
        configs.insert("cpp", cpp_config.clone());
        configs.insert("cc", cpp_config.clone());
        configs.insert("cxx", cpp_config.clone());
        configs.insert("hpp", cpp_config.clone());
        configs.insert("h", cpp_config); // .h is ambiguous, default to C++

        let javascript_config = LanguageConfig::new(
            tree_sitter_javascript::LANGUAGE.into(),
            JAVASCRIPT_OUTLINE_QUERY,
        );
        configs.insert("js", javascript_config.clone());
        configs.insert("jsx", javascript_config.clone());
        configs.insert("mjs", javascript_config);

        // TypeScript's grammar is a superset of JavaScript's, so the same
        // outline query covers both.
        let typescript_config = LanguageConfig::new(
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            JAVASCRIPT_OUTLINE_QUERY,
        );
        configs.insert("ts", typescript_config);

        let tsx_config = LanguageConfig::new(
            tree_sitter_typescript::LANGUAGE_TSX.into(),
            JAVASCRIPT_OUTLINE_QUERY,
        );
        configs.insert("tsx", tsx_config);

        let python_config =
            LanguageConfig::new(tree_sitter_python::LANGUAGE.into(), PYTHON_OUTLINE_QUERY);
        configs.insert("py", python_config);

        let go_config = LanguageConfig::new(tree_sitter_go::LANGUAGE.into(), GO_OUTLINE_QUERY);
        configs.insert("go", go_config);

        Self { configs }
    }

    /// Returns the language configuration for a file extension.
    ///
    /// The extension can be with or without a leading dot (e.g., ".rs" or "rs").
    pub fn config_for_extension(&self, ext: &str) -> Option<&LanguageConfig> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.configs.get(ext)
    }

    /// Returns the language configuration for a language name such as
    /// "rust" or "typescript".
    pub fn config_for_language_name(&self, name: &str) -> Option<&LanguageConfig> {
        let name = name.to_lowercase();
        let name = name.trim();

        let ext = match name {
            "rust" => "rs",
            "c" => "c",
            "cpp" | "c++" => "cpp",
            "javascript" | "js" => "js",
            "typescript" | "ts" => "ts",
            "tsx" => "tsx",
            "python" => "py",
            "go" | "golang" => "go",
            // Pass through extension names directly
            other => other,
        };

        self.config_for_extension(ext)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
