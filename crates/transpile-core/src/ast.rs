//! Input AST types.
//!
//! ARCHITECTURE: This module defines the closed node-kind enumeration the
//! engine walks. It is *not* a parser: nodes are built by a host front-end
//! (outside this crate's scope) or, in this crate, by test fixtures and the
//! `transpile-cli` JSON loader. Every node carries an optional [`TypeHint`]
//! so that [`crate::checker::FixtureChecker`] can answer `type_at` without a
//! separate side table — see `crate::checker` for why.

use std::fmt;

/// A single AST node: a kind-tagged payload plus an optional declared/inferred
/// type, attributed directly on the node the way a decorated syntax tree would.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub data: NodeData,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub type_hint: Option<TypeHint>,
}

impl Node {
    /// Construct a node with no type information attached.
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            type_hint: None,
        }
    }

    /// Construct a node carrying a type hint, for expression positions a host
    /// type-checker would annotate.
    pub fn typed(data: NodeData, hint: TypeHint) -> Self {
        Self {
            data,
            type_hint: Some(hint),
        }
    }

    /// Symbolic name of this node's kind, for diagnostics.
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

/// Bit flags for declaration modifiers.
///
/// Only the two modifiers the engine inspects are modeled; SL has more
/// (`readonly`, `public`, `private`, ...) but the engine never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub is_declare: bool,
    pub is_static: bool,
}

/// Declaration, statement, and expression payloads.
///
/// ARCHITECTURE: one variant per closed syntactic category from the data
/// model (declarations, statements, expressions). `Node::kind` maps each
/// variant to its [`NodeKind`] tag for exhaustive dispatch and diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data"))]
pub enum NodeData {
    // -- Declarations --
    SourceFile(Vec<Node>),
    Import(ImportDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
    Function(FunctionDecl),
    Variable(VariableDecl),
    Parameter(Parameter),
    Interface,
    TypeAlias,

    // -- Statements --
    Block(Vec<Node>),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    ForOf(ForInOfStmt),
    ForIn(ForInOfStmt),
    Switch(SwitchStmt),
    Return(Option<Box<Node>>),
    ExprStatement(Box<Node>),
    Break,
    Continue,
    VariableStatement(Vec<VariableDecl>),

    // -- Expressions --
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Conditional(ConditionalExpr),
    Call(CallExpr),
    PropertyAccess(PropertyAccessExpr),
    ElementAccess(ElementAccessExpr),
    New(CallExpr),
    Identifier(String),
    StringLiteral(String),
    NumericLiteral(String),
    True,
    False,
    ArrayLiteral(Vec<Node>),
    ObjectLiteral(Vec<ObjectProperty>),
    FunctionExpr(FunctionExpr),
    TypeAssertion(Box<Node>),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::SourceFile(_) => NodeKind::SourceFile,
            NodeData::Import(_) => NodeKind::Import,
            NodeData::Class(_) => NodeKind::Class,
            NodeData::Enum(_) => NodeKind::Enum,
            NodeData::Function(_) => NodeKind::Function,
            NodeData::Variable(_) => NodeKind::Variable,
            NodeData::Parameter(_) => NodeKind::Parameter,
            NodeData::Interface => NodeKind::Interface,
            NodeData::TypeAlias => NodeKind::TypeAlias,
            NodeData::Block(_) => NodeKind::Block,
            NodeData::If(_) => NodeKind::If,
            NodeData::While(_) => NodeKind::While,
            NodeData::For(_) => NodeKind::For,
            NodeData::ForOf(_) => NodeKind::ForOf,
            NodeData::ForIn(_) => NodeKind::ForIn,
            NodeData::Switch(_) => NodeKind::Switch,
            NodeData::Return(_) => NodeKind::Return,
            NodeData::ExprStatement(_) => NodeKind::ExprStatement,
            NodeData::Break => NodeKind::Break,
            NodeData::Continue => NodeKind::Continue,
            NodeData::VariableStatement(_) => NodeKind::VariableStatement,
            NodeData::Binary(_) => NodeKind::Binary,
            NodeData::Unary(_) => NodeKind::Unary,
            NodeData::Conditional(_) => NodeKind::Conditional,
            NodeData::Call(_) => NodeKind::Call,
            NodeData::PropertyAccess(_) => NodeKind::PropertyAccess,
            NodeData::ElementAccess(_) => NodeKind::ElementAccess,
            NodeData::New(_) => NodeKind::New,
            NodeData::Identifier(_) => NodeKind::Identifier,
            NodeData::StringLiteral(_) => NodeKind::StringLiteral,
            NodeData::NumericLiteral(_) => NodeKind::NumericLiteral,
            NodeData::True => NodeKind::True,
            NodeData::False => NodeKind::False,
            NodeData::ArrayLiteral(_) => NodeKind::ArrayLiteral,
            NodeData::ObjectLiteral(_) => NodeKind::ObjectLiteral,
            NodeData::FunctionExpr(_) => NodeKind::FunctionExpr,
            NodeData::TypeAssertion(_) => NodeKind::TypeAssertion,
        }
    }
}

/// Symbolic tag for a [`NodeData`] variant, used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SourceFile,
    Import,
    Class,
    Enum,
    Function,
    Variable,
    Parameter,
    Interface,
    TypeAlias,
    Block,
    If,
    While,
    For,
    ForOf,
    ForIn,
    Switch,
    Return,
    ExprStatement,
    Break,
    Continue,
    VariableStatement,
    Binary,
    Unary,
    Conditional,
    Call,
    PropertyAccess,
    ElementAccess,
    New,
    Identifier,
    StringLiteral,
    NumericLiteral,
    True,
    False,
    ArrayLiteral,
    ObjectLiteral,
    FunctionExpr,
    TypeAssertion,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Declared or inferred type of an expression node, attributed directly on
/// the node by whatever produced the AST. See [`crate::checker::TypeHint`]
/// usage notes in `checker.rs` for how this maps onto [`crate::checker::Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeHint {
    String,
    StringLiteral,
    Number,
    Boolean,
    Array,
    Object,
    /// The node's symbol is an enum declaration (used on the `Identifier`
    /// naming the enum in `Identifier.Member` access).
    Enum,
}

// ============================================================================
// Declaration payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportDecl {
    /// `import * as N from "m"`
    Namespace { alias: String, module: String },
    /// `import { a, b } from "m"`; SL with no renamed bindings.
    Named { module: String },
    /// Anything else (renamed bindings, default imports, ...).
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    pub name: String,
    pub modifiers: Modifiers,
    pub properties: Vec<PropertyDecl>,
    pub constructor: Option<ConstructorDecl>,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDecl {
    pub name: String,
    pub modifiers: Modifiers,
    pub initializer: Option<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorDecl {
    pub params: Vec<Parameter>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumMember {
    pub name: String,
    /// `None` for an auto-incremented member; `Some(node)` for an explicit
    /// initializer, which must be a `NumericLiteral` or the engine rejects it.
    pub initializer: Option<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDecl {
    pub name: String,
    pub modifiers: Modifiers,
    pub params: Vec<Parameter>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableDecl {
    pub name: String,
    pub initializer: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
}

// ============================================================================
// Statement payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    pub cond: Box<Node>,
    pub then_branch: Box<Node>,
    pub else_branch: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhileStmt {
    pub cond: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForStmt {
    pub init: Vec<VariableDecl>,
    pub cond: Option<Box<Node>>,
    pub incr: Option<Box<Node>>,
    pub body: Box<Node>,
}

/// Shared shape of `for (v of expr) body` and `for (v in expr) body`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForInOfStmt {
    pub binding: VariableDecl,
    pub iterable: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchStmt {
    pub scrutinee: Box<Node>,
    pub clauses: Vec<SwitchClause>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchClause {
    Case { test: Box<Node>, body: Vec<Node> },
    Default { body: Vec<Node> },
}

impl SwitchClause {
    pub fn body(&self) -> &[Node] {
        match self {
            SwitchClause::Case { body, .. } => body,
            SwitchClause::Default { body } => body,
        }
    }
}

// ============================================================================
// Expression payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpr {
    pub op: String,
    pub operand: Box<Node>,
    pub prefix: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalExpr {
    pub cond: Box<Node>,
    pub then_expr: Box<Node>,
    pub else_expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpr {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyAccessExpr {
    pub object: Box<Node>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAccessExpr {
    pub object: Box<Node>,
    pub index: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectProperty {
    KeyValue { key: PropertyKey, value: Node },
    Shorthand(String),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKey {
    Identifier(String),
    Computed(Box<Node>),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionExpr {
    pub params: Vec<Parameter>,
    pub body: Vec<Node>,
}
