//! The type-checker collaborator interface.
//!
//! ARCHITECTURE: The engine never infers types. It queries an external
//! `TypeChecker` for exactly two things — the type of an expression node, and
//! whether a type is array-shaped — and uses only `flags`/`symbol` off the
//! result. This module defines that interface plus `FixtureChecker`, a
//! trivial implementation good enough for tests and the CLI: it reads the
//! [`crate::ast::TypeHint`] a host has already attributed on each node
//! instead of performing inference.

use bitflags::bitflags;

use crate::ast::{Node, TypeHint};

bitflags! {
    /// Bit-set of a [`Type`]'s flags. Only the bits the engine reads are
    /// modeled; a real host checker's flag set is much larger.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeFlags: u32 {
        const STRING         = 1 << 0;
        const STRING_LITERAL = 1 << 1;
        const OBJECT         = 1 << 2;
        const NUMBER         = 1 << 3;
        const BOOLEAN        = 1 << 4;
        /// Not part of the host checker's real flag set (arrays are a
        /// structural property of an `Object` type, recovered via
        /// `TypeChecker::is_array_type`). Modeled as a flag here only so
        /// `FixtureChecker` can build a `Type` without a structural type
        /// graph; see DESIGN.md for this simplification.
        const ARRAY          = 1 << 5;
    }
}

bitflags! {
    /// Bit-set of a [`Symbol`]'s flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SymbolFlags: u32 {
        const ENUM = 1 << 0;
    }
}

/// The symbol behind a type, when the type names a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub escaped_name: String,
    pub flags: SymbolFlags,
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol {
            escaped_name: String::new(),
            flags: SymbolFlags::empty(),
        }
    }
}

/// The type of an expression, as seen by the host checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub flags: TypeFlags,
    pub symbol: Option<Symbol>,
}

impl Default for Type {
    fn default() -> Self {
        Type {
            flags: TypeFlags::empty(),
            symbol: None,
        }
    }
}

impl Type {
    pub fn is_string(&self) -> bool {
        self.flags
            .intersects(TypeFlags::STRING | TypeFlags::STRING_LITERAL)
    }

    pub fn is_object(&self) -> bool {
        self.flags.contains(TypeFlags::OBJECT)
    }

    pub fn symbol_has_enum_flag(&self) -> bool {
        self.symbol
            .as_ref()
            .is_some_and(|s| s.flags.contains(SymbolFlags::ENUM))
    }
}

impl From<TypeHint> for Type {
    fn from(hint: TypeHint) -> Self {
        match hint {
            TypeHint::String => Type {
                flags: TypeFlags::STRING,
                symbol: None,
            },
            TypeHint::StringLiteral => Type {
                flags: TypeFlags::STRING | TypeFlags::STRING_LITERAL,
                symbol: None,
            },
            TypeHint::Number => Type {
                flags: TypeFlags::NUMBER,
                symbol: None,
            },
            TypeHint::Boolean => Type {
                flags: TypeFlags::BOOLEAN,
                symbol: None,
            },
            TypeHint::Array => Type {
                flags: TypeFlags::OBJECT | TypeFlags::ARRAY,
                symbol: None,
            },
            TypeHint::Object => Type {
                flags: TypeFlags::OBJECT,
                symbol: None,
            },
            TypeHint::Enum => Type {
                flags: TypeFlags::empty(),
                symbol: Some(Symbol {
                    escaped_name: String::new(),
                    flags: SymbolFlags::ENUM,
                }),
            },
        }
    }
}

/// The engine's sole view of the host's type-checker.
///
/// Implementors must not panic; an unresolvable node should answer with an
/// empty [`Type`] (no flags, no symbol), which the engine treats as "not a
/// primitive, not an enum".
pub trait TypeChecker {
    fn type_at(&self, node: &Node) -> Type;

    fn is_array_type(&self, ty: &Type) -> bool {
        ty.flags.contains(TypeFlags::OBJECT) && ty.flags.contains(TypeFlags::ARRAY)
    }
}

/// A `TypeChecker` that reads the [`TypeHint`] already attributed on each
/// node. Used by `transpile-core`'s own tests and by `transpile-cli`, which
/// loads a JSON AST whose expression nodes carry a `"type_hint"` field.
///
/// This is deliberately not a type-inference engine: inferring types from
/// unannotated SL source is a host responsibility out of this crate's scope.
#[derive(Debug, Default)]
pub struct FixtureChecker;

impl FixtureChecker {
    pub fn new() -> Self {
        Self
    }
}

impl TypeChecker for FixtureChecker {
    fn type_at(&self, node: &Node) -> Type {
        node.type_hint.map(Type::from).unwrap_or_default()
    }
}
