//! Transpile Core - semantic translation engine
//!
//! # Overview
//!
//! `transpile-core` is a pure library that walks a type-checked, source-
//! language abstract syntax tree and emits target-language source text. The
//! source language is statically typed, class-and-interface-based, and
//! semicolon-terminated; the target is dynamically typed, table-based, and
//! uses keyword-delimited control flow (`if/then/end`, `while/do/end`).
//!
//! # Architecture
//!
//! **This is a LIBRARY with NO I/O and NO parsing.**
//! - Accepts an already-built [`ast::Node`] tree, not source text
//! - Accepts a [`checker::TypeChecker`] collaborator, not an inference engine
//! - Returns `Result<String>`, never writes to stdout or disk
//! - Pure transformation, no side effects beyond its own `Context`
//!
//! A host front-end (parser + type-checker) and the `transpile-cli` binary in
//! this workspace are the I/O layers.
//!
//! # Example
//!
//! ```
//! use transpile_core::ast::{Node, NodeData};
//! use transpile_core::checker::FixtureChecker;
//! use transpile_core::{transpile_source_file, TranspileConfig};
//!
//! let source_file = Node::new(NodeData::SourceFile(vec![Node::new(
//!     NodeData::ExprStatement(Box::new(Node::new(NodeData::True))),
//! )]));
//! let checker = FixtureChecker::new();
//! let output = transpile_source_file(&source_file, &checker, TranspileConfig::default())?;
//! assert_eq!(output, "true\n");
//! # Ok::<(), transpile_core::error::TranslationError>(())
//! ```
//!
//! # Design Principles
//!
//! 1. **Result types everywhere** — no panics (enforced by clippy)
//! 2. **Dependency injection** — the type-checker and config are passed in,
//!    never read from globals
//! 3. **Closed dispatch** — every AST shape is matched exhaustively; an
//!    unhandled shape is a translation error, not a silent no-op

pub mod ast;
pub mod checker;
mod context;
pub mod error;
pub mod query;
mod transpile;
pub mod types;

pub use error::{Result, TranslationError};
pub use transpile::transpile_source_file;
pub use types::TranspileConfig;
