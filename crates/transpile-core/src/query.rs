//! Stateless predicates and accessors over the input AST.
//!
//! ARCHITECTURE: small, pure helpers shared by the statement and expression
//! translators. Kept in one module so a caller never has to decide whether a
//! given query belongs to "statements" or "expressions" — it's a property of
//! the AST shape alone.

use crate::ast::{Node, NodeData, NodeKind};
use crate::checker::{Type, TypeChecker};

/// Immediate child nodes of `node`, for generic tree utilities (node counts,
/// depth checks) that don't need to know the specific shape of each kind.
///
/// Declarations/statements/expressions with a fixed arity return their
/// children in source order; leaf nodes return an empty vector.
pub fn children(node: &Node) -> Vec<&Node> {
    match &node.data {
        NodeData::SourceFile(stmts) | NodeData::Block(stmts) => stmts.iter().collect(),
        NodeData::VariableStatement(decls) => decls
            .iter()
            .filter_map(|d| d.initializer.as_deref())
            .collect(),
        NodeData::Import(_) | NodeData::Interface | NodeData::TypeAlias => vec![],
        NodeData::Class(c) => {
            let mut out: Vec<&Node> = c
                .properties
                .iter()
                .filter_map(|p| p.initializer.as_ref())
                .collect();
            if let Some(ctor) = &c.constructor {
                out.extend(ctor.body.iter());
            }
            for m in &c.methods {
                out.extend(m.body.iter());
            }
            out
        }
        NodeData::Enum(e) => e.members.iter().filter_map(|m| m.initializer.as_ref()).collect(),
        NodeData::Function(f) => f.body.iter().collect(),
        NodeData::Variable(v) => v.initializer.iter().map(|b| b.as_ref()).collect(),
        NodeData::Parameter(_) => vec![],
        NodeData::If(s) => {
            let mut out = vec![s.cond.as_ref(), s.then_branch.as_ref()];
            if let Some(e) = &s.else_branch {
                out.push(e.as_ref());
            }
            out
        }
        NodeData::While(s) => vec![s.cond.as_ref(), s.body.as_ref()],
        NodeData::For(s) => {
            let mut out: Vec<&Node> = s.init.iter().filter_map(|d| d.initializer.as_deref()).collect();
            if let Some(c) = &s.cond {
                out.push(c.as_ref());
            }
            if let Some(i) = &s.incr {
                out.push(i.as_ref());
            }
            out.push(s.body.as_ref());
            out
        }
        NodeData::ForOf(s) | NodeData::ForIn(s) => vec![s.iterable.as_ref(), s.body.as_ref()],
        NodeData::Switch(s) => {
            let mut out = vec![s.scrutinee.as_ref()];
            for clause in &s.clauses {
                out.extend(clause.body().iter());
            }
            out
        }
        NodeData::Return(v) => v.iter().map(|b| b.as_ref()).collect(),
        NodeData::ExprStatement(e) => vec![e.as_ref()],
        NodeData::Break | NodeData::Continue => vec![],
        NodeData::Binary(b) => vec![b.left.as_ref(), b.right.as_ref()],
        NodeData::Unary(u) => vec![u.operand.as_ref()],
        NodeData::Conditional(c) => vec![c.cond.as_ref(), c.then_expr.as_ref(), c.else_expr.as_ref()],
        NodeData::Call(c) | NodeData::New(c) => {
            let mut out = vec![c.callee.as_ref()];
            out.extend(c.args.iter());
            out
        }
        NodeData::PropertyAccess(p) => vec![p.object.as_ref()],
        NodeData::ElementAccess(e) => vec![e.object.as_ref(), e.index.as_ref()],
        NodeData::Identifier(_)
        | NodeData::StringLiteral(_)
        | NodeData::NumericLiteral(_)
        | NodeData::True
        | NodeData::False => vec![],
        NodeData::ArrayLiteral(items) => items.iter().collect(),
        NodeData::ObjectLiteral(props) => props
            .iter()
            .filter_map(|p| match p {
                crate::ast::ObjectProperty::KeyValue { value, .. } => Some(value),
                // A shorthand property names an enclosing-scope binding, not
                // a child expression node.
                crate::ast::ObjectProperty::Shorthand(_) => None,
            })
            .collect(),
        NodeData::FunctionExpr(f) => f.body.iter().collect(),
        NodeData::TypeAssertion(inner) => vec![inner.as_ref()],
    }
}

/// `true` if `node` is an identifier naming `name`.
pub fn is_identifier(node: &Node, name: &str) -> bool {
    matches!(&node.data, NodeData::Identifier(n) if n == name)
}

/// The first immediate child of `node` whose kind is `kind`, if any.
pub fn first_child_of_kind(node: &Node, kind: NodeKind) -> Option<&Node> {
    children(node).into_iter().find(|child| child.kind() == kind)
}

/// Whether `ty` is array-shaped, per the host checker's structural test.
/// Thin delegation kept here so callers reach for `query::is_array_type`
/// alongside the rest of the AST predicates rather than importing the
/// checker trait directly at every call site.
pub fn is_array_type(checker: &dyn TypeChecker, ty: &Type) -> bool {
    checker.is_array_type(ty)
}

/// Human-readable, static description of a node kind for error messages that
/// require a `&'static str` receiver-kind label (property access on a
/// receiver kind with no translation rule).
pub fn node_kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::SourceFile => "source file",
        NodeKind::Import => "import",
        NodeKind::Class => "class",
        NodeKind::Enum => "enum",
        NodeKind::Function => "function",
        NodeKind::Variable => "variable",
        NodeKind::Parameter => "parameter",
        NodeKind::Interface => "interface",
        NodeKind::TypeAlias => "type alias",
        NodeKind::Block => "block",
        NodeKind::If => "if",
        NodeKind::While => "while",
        NodeKind::For => "for",
        NodeKind::ForOf => "for-of",
        NodeKind::ForIn => "for-in",
        NodeKind::Switch => "switch",
        NodeKind::Return => "return",
        NodeKind::ExprStatement => "expression statement",
        NodeKind::Break => "break",
        NodeKind::Continue => "continue",
        NodeKind::VariableStatement => "variable statement",
        NodeKind::Binary => "binary expression",
        NodeKind::Unary => "unary expression",
        NodeKind::Conditional => "conditional expression",
        NodeKind::Call => "call expression",
        NodeKind::PropertyAccess => "property access",
        NodeKind::ElementAccess => "element access",
        NodeKind::New => "new expression",
        NodeKind::Identifier => "identifier",
        NodeKind::StringLiteral => "string literal",
        NodeKind::NumericLiteral => "numeric literal",
        NodeKind::True => "true",
        NodeKind::False => "false",
        NodeKind::ArrayLiteral => "array literal",
        NodeKind::ObjectLiteral => "object literal",
        NodeKind::FunctionExpr => "function expression",
        NodeKind::TypeAssertion => "type assertion",
    }
}
