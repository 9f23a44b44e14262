//! Error types for the translation engine.
//!
//! ARCHITECTURE: Using thiserror for ergonomic error handling. All library
//! functions return `Result<T, TranslationError>`. No panics in library code
//! (enforced by the `unwrap_used`/`expect_used`/`panic` clippy lints in
//! `Cargo.toml`).

use thiserror::Error;

use crate::ast::{Node, NodeKind};

/// The engine's one error kind: a fatal, node-localized translation failure.
///
/// Raised and never caught internally; it propagates to the caller of
/// `transpile_source_file`. Every variant carries the offending node so a
/// host with source positions can resolve one later — this crate has none to
/// report itself (no parsing, no source maps).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranslationError {
    /// An AST node kind with no translation rule.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNode { kind: NodeKind, node: Node },

    /// An import shape other than namespace or (unrenamed) named import.
    #[error("unsupported import form")]
    UnsupportedImport { node: Node },

    /// An enum member initializer that isn't a numeric literal.
    #[error("enum member initializer must be numeric")]
    NonNumericEnumInitializer { node: Node },

    /// `continue` has no representation in the target language's fall-through
    /// `goto` model used for `switch`, and is rejected everywhere.
    #[error("`continue` is not supported")]
    UnsupportedContinue { node: Node },

    /// A classical `for` header that cannot be reduced to a numeric `for`.
    #[error("unsupported `for` loop header")]
    UnsupportedForHeader { node: Node },

    /// A method call on a primitive (string/array) receiver outside the
    /// supported whitelist.
    #[error("unsupported method `{name}` on {receiver_kind} receiver")]
    UnsupportedMethod {
        receiver_kind: &'static str,
        name: String,
        node: Node,
    },

    /// A property access on a primitive receiver outside the supported
    /// whitelist, or on a receiver kind with no translation rule at all.
    #[error("unsupported property `{name}` on {receiver_kind} receiver")]
    UnsupportedProperty {
        receiver_kind: &'static str,
        name: String,
        node: Node,
    },

    /// A binary or unary operator token the engine does not rewrite and does
    /// not pass through (currently unused by operator rewriting itself, which
    /// always passes unknown tokens through verbatim, but raised by
    /// unary-operator dispatch for unsupported operators).
    #[error("unsupported operator `{operator}`")]
    UnsupportedOperator { operator: String, node: Node },
}

impl TranslationError {
    /// The node this error is localized to.
    pub fn node(&self) -> &Node {
        match self {
            TranslationError::UnsupportedNode { node, .. }
            | TranslationError::UnsupportedImport { node }
            | TranslationError::NonNumericEnumInitializer { node }
            | TranslationError::UnsupportedContinue { node }
            | TranslationError::UnsupportedForHeader { node }
            | TranslationError::UnsupportedMethod { node, .. }
            | TranslationError::UnsupportedProperty { node, .. }
            | TranslationError::UnsupportedOperator { node, .. } => node,
        }
    }
}

/// Result type alias for the translation engine.
pub type Result<T> = std::result::Result<T, TranslationError>;
