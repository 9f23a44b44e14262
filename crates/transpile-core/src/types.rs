//! Transpile configuration.
//!
//! ARCHITECTURE: injected into `Context::new`, never read from globals or
//! environment. Mirrors the builder-style `TransformConfig` pattern: a
//! `Default` impl plus `with_*` builder methods that consume and return
//! `Self`.

/// Configuration for one `transpile_source_file` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileConfig {
    /// Number of spaces per indentation level. The engine defaults to four;
    /// exposed as a config knob since nothing about the engine depends on
    /// the literal value four, only on indentation being uniform.
    pub indent_width: usize,

    /// Quote character used when re-emitting string literals. Defaults to
    /// `"`; kept as a knob for hosts targeting a TL dialect or style guide
    /// that prefers single quotes.
    pub quote_char: char,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            quote_char: '"',
        }
    }
}

impl TranspileConfig {
    /// Builder: override the indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Builder: override the string-literal quote character.
    pub fn with_quote_char(mut self, quote: char) -> Self {
        self.quote_char = quote;
        self
    }
}
