//! Statement translation and the public entry point.
//!
//! ARCHITECTURE: `transpile_source_file` builds one `Context` and walks the
//! root `SourceFile` node. `Context::transpile_node` is the closed
//! kind-dispatch every other statement-shaped translator (class, switch,
//! for-header) is reached from.

mod class;
mod expr;
mod for_header;
mod switch;

use crate::ast::{Node, NodeData};
use crate::checker::TypeChecker;
use crate::context::Context;
use crate::error::{Result, TranslationError};
use crate::types::TranspileConfig;

/// Translate a whole source file into target-language text.
///
/// Builds one `Context`, walks `ast_root`, and returns the accumulated
/// output. On any unsupported construct, returns the offending
/// `TranslationError` and no partial output.
pub fn transpile_source_file(
    ast_root: &Node,
    checker: &dyn TypeChecker,
    config: TranspileConfig,
) -> Result<String> {
    let mut ctx = Context::new(checker, config);
    ctx.transpile_node(ast_root)
}

impl Context<'_> {
    /// Translate one declaration or statement node, including trailing
    /// newline(s). Nodes carrying a `declare` modifier, interfaces, and type
    /// aliases are dropped (emit nothing).
    pub(crate) fn transpile_node(&mut self, node: &Node) -> Result<String> {
        match &node.data {
            NodeData::SourceFile(stmts) => self.transpile_block(stmts),
            NodeData::Block(stmts) => self.transpile_block(stmts),
            NodeData::Interface | NodeData::TypeAlias => Ok(String::new()),
            NodeData::Import(import) => self.transpile_import(import, node),
            NodeData::Enum(e) => self.transpile_enum(e, node),
            NodeData::Class(class) => {
                if class.modifiers.is_declare {
                    return Ok(String::new());
                }
                self.transpile_class(class)
            }
            NodeData::Function(f) => {
                if f.modifiers.is_declare {
                    return Ok(String::new());
                }
                self.transpile_function(&f.name, &f.params, &f.body)
            }
            NodeData::Variable(v) => {
                if let Some(init) = &v.initializer {
                    let init_tl = self.transpile_expr(init, false)?;
                    Ok(format!("{}local {} = {}\n", self.indent(), v.name, init_tl))
                } else {
                    Ok(format!("{}local {}\n", self.indent(), v.name))
                }
            }
            NodeData::VariableStatement(decls) => {
                let mut out = String::new();
                for decl in decls {
                    if let Some(init) = &decl.initializer {
                        let init_tl = self.transpile_expr(init, false)?;
                        out.push_str(&format!(
                            "{}local {} = {}\n",
                            self.indent(),
                            decl.name,
                            init_tl
                        ));
                    } else {
                        out.push_str(&format!("{}local {}\n", self.indent(), decl.name));
                    }
                }
                Ok(out)
            }
            NodeData::If(s) => {
                let cond = self.transpile_expr(&s.cond, false)?;
                self.push_indent();
                let then_branch = self.transpile_node(&s.then_branch)?;
                self.pop_indent();
                let mut out = format!("{}if {} then\n{}", self.indent(), cond, then_branch);
                if let Some(else_branch) = &s.else_branch {
                    self.push_indent();
                    let else_tl = self.transpile_node(else_branch)?;
                    self.pop_indent();
                    out.push_str(&format!("{}else\n{}", self.indent(), else_tl));
                }
                out.push_str(&format!("{}end\n", self.indent()));
                Ok(out)
            }
            NodeData::While(s) => {
                let cond = self.transpile_expr(&s.cond, false)?;
                self.push_indent();
                let body = self.transpile_node(&s.body)?;
                self.pop_indent();
                Ok(format!(
                    "{indent}while {cond} do\n{body}{indent}end\n",
                    indent = self.indent()
                ))
            }
            NodeData::For(s) => self.transpile_for(s),
            NodeData::ForOf(s) => self.transpile_for_in_of(s, true),
            NodeData::ForIn(s) => self.transpile_for_in_of(s, false),
            NodeData::Switch(s) => self.transpile_switch(s),
            NodeData::Return(value) => match value {
                Some(expr) => {
                    let tl = self.transpile_expr(expr, false)?;
                    Ok(format!("{}return {}\n", self.indent(), tl))
                }
                None => Ok(format!("{}return\n", self.indent())),
            },
            NodeData::ExprStatement(expr) => {
                let tl = self.transpile_expr(expr, false)?;
                Ok(format!("{}{}\n", self.indent(), tl))
            }
            NodeData::Break => match (self.in_switch(), self.current_switch_id()) {
                (true, Some(switch_id)) => {
                    Ok(format!("{}goto switchDone{}\n", self.indent(), switch_id))
                }
                _ => Ok(format!("{}break\n", self.indent())),
            },
            NodeData::Continue => Err(TranslationError::UnsupportedContinue { node: node.clone() }),
            _ => Err(TranslationError::UnsupportedNode {
                kind: node.kind(),
                node: node.clone(),
            }),
        }
    }

    /// Concatenate the translation of each statement in `stmts` in source
    /// order.
    pub(crate) fn transpile_block(&mut self, stmts: &[Node]) -> Result<String> {
        let mut out = String::new();
        for stmt in stmts {
            out.push_str(&self.transpile_node(stmt)?);
        }
        Ok(out)
    }

    fn transpile_function(
        &mut self,
        name: &str,
        params: &[crate::ast::Parameter],
        body: &[Node],
    ) -> Result<String> {
        let params_tl = params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        self.push_indent();
        let body_tl = self.transpile_block(body)?;
        self.pop_indent();
        Ok(format!(
            "{indent}function {name}({params_tl})\n{body_tl}{indent}end\n",
            indent = self.indent()
        ))
    }

    fn transpile_for(&mut self, s: &crate::ast::ForStmt) -> Result<String> {
        let [init] = s.init.as_slice() else {
            return Err(TranslationError::UnsupportedForHeader {
                node: Node::new(NodeData::For(s.clone())),
            });
        };
        let Some(start_node) = &init.initializer else {
            return Err(TranslationError::UnsupportedForHeader {
                node: Node::new(NodeData::For(s.clone())),
            });
        };
        let start = self.transpile_expr(start_node, false)?;

        let cond = s.cond.as_deref().ok_or_else(|| {
            TranslationError::UnsupportedForHeader {
                node: Node::new(NodeData::For(s.clone())),
            }
        })?;
        let end = for_header::get_for_end(self, cond)?;

        let incr = s.incr.as_deref().ok_or_else(|| {
            TranslationError::UnsupportedForHeader {
                node: Node::new(NodeData::For(s.clone())),
            }
        })?;
        let step = for_header::get_for_step(self, incr)?;

        self.push_indent();
        let body = self.transpile_node(&s.body)?;
        self.pop_indent();

        Ok(format!(
            "{indent}for {var}={start},{end},{step} do\n{body}{indent}end\n",
            indent = self.indent(),
            var = init.name,
        ))
    }

    fn transpile_for_in_of(&mut self, s: &crate::ast::ForInOfStmt, is_of: bool) -> Result<String> {
        let iterable_ty = self.checker.type_at(&s.iterable);
        let iterable = self.transpile_expr(&s.iterable, false)?;
        let is_array = crate::query::is_array_type(self.checker, &iterable_ty);

        self.push_indent();
        let body = self.transpile_node(&s.body)?;
        self.pop_indent();

        let var = &s.binding.name;
        let header = if is_of {
            if is_array {
                format!("for _, {var} in ipairs({iterable}) do\n")
            } else {
                format!("for _, {var} in pairs({iterable}) do\n")
            }
        } else if is_array {
            format!("for {var}, _ in ipairs({iterable}) do\n")
        } else {
            format!("for {var}, _ in pairs({iterable}) do\n")
        };

        Ok(format!(
            "{indent}{header}{body}{indent}end\n",
            indent = self.indent()
        ))
    }

    fn transpile_import(&mut self, import: &crate::ast::ImportDecl, node: &Node) -> Result<String> {
        match import {
            crate::ast::ImportDecl::Namespace { alias, module } => {
                Ok(format!("{}{} = require(\"{}\")\n", self.indent(), alias, module))
            }
            crate::ast::ImportDecl::Named { module } => {
                Ok(format!("{}require(\"{}\")\n", self.indent(), module))
            }
            crate::ast::ImportDecl::Unsupported => {
                Err(TranslationError::UnsupportedImport { node: node.clone() })
            }
        }
    }

    fn transpile_enum(&mut self, e: &crate::ast::EnumDecl, _node: &Node) -> Result<String> {
        let mut out = String::new();
        let mut next_value: i64 = 0;
        for member in &e.members {
            let value = match &member.initializer {
                Some(init) => match &init.data {
                    NodeData::NumericLiteral(text) => {
                        text.parse::<i64>().map_err(|_| {
                            TranslationError::NonNumericEnumInitializer { node: init.clone() }
                        })?
                    }
                    _ => {
                        return Err(TranslationError::NonNumericEnumInitializer {
                            node: init.clone(),
                        })
                    }
                },
                None => next_value,
            };
            out.push_str(&format!("{}{}={}\n", self.indent(), member.name, value));
            next_value = value + 1;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Unwrapping is acceptable in tests
mod tests {
    use super::*;
    use crate::ast::{EnumDecl, EnumMember, IfStmt, NodeData, VariableDecl};
    use crate::checker::FixtureChecker;

    fn ident(name: &str) -> Node {
        Node::new(NodeData::Identifier(name.to_string()))
    }

    #[test]
    fn if_without_else_omits_else_branch() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::If(IfStmt {
            cond: Box::new(ident("ok")),
            then_branch: Box::new(Node::new(NodeData::Block(vec![Node::new(
                NodeData::ExprStatement(Box::new(ident("ok"))),
            )]))),
            else_branch: None,
        }));
        let out = ctx.transpile_node(&node).unwrap();
        assert!(out.starts_with("if ok then\n"));
        assert!(!out.contains("else"));
        assert!(out.ends_with("end\n"));
    }

    #[test]
    fn enum_members_auto_increment_and_reset_on_literal() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Enum(EnumDecl {
            name: "Color".to_string(),
            members: vec![
                EnumMember { name: "A".to_string(), initializer: None },
                EnumMember {
                    name: "B".to_string(),
                    initializer: Some(Node::new(NodeData::NumericLiteral("5".to_string()))),
                },
                EnumMember { name: "C".to_string(), initializer: None },
            ],
        }));
        let out = ctx.transpile_node(&node).unwrap();
        assert_eq!(out, "A=0\nB=5\nC=6\n");
    }

    #[test]
    fn namespace_import_becomes_require_assignment() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Import(crate::ast::ImportDecl::Namespace {
            alias: "fs".to_string(),
            module: "fs".to_string(),
        }));
        assert_eq!(
            ctx.transpile_node(&node).unwrap(),
            "fs = require(\"fs\")\n"
        );
    }

    #[test]
    fn continue_is_rejected() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Continue);
        assert!(matches!(
            ctx.transpile_node(&node),
            Err(TranslationError::UnsupportedContinue { .. })
        ));
    }

    #[test]
    fn break_outside_switch_is_plain_break() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Break);
        assert_eq!(ctx.transpile_node(&node).unwrap(), "break\n");
    }

    #[test]
    fn declared_function_is_dropped() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Function(crate::ast::FunctionDecl {
            name: "f".to_string(),
            modifiers: crate::ast::Modifiers {
                is_declare: true,
                is_static: false,
            },
            params: vec![],
            body: vec![],
        }));
        assert_eq!(ctx.transpile_node(&node).unwrap(), "");
    }

    #[test]
    fn declared_class_is_dropped() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Class(crate::ast::ClassDecl {
            name: "C".to_string(),
            modifiers: crate::ast::Modifiers {
                is_declare: true,
                is_static: false,
            },
            properties: vec![],
            constructor: None,
            methods: vec![],
        }));
        assert_eq!(ctx.transpile_node(&node).unwrap(), "");
    }

    #[test]
    fn variable_with_initializer_emits_local_assignment() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Variable(VariableDecl {
            name: "x".to_string(),
            initializer: Some(Box::new(Node::new(NodeData::NumericLiteral("1".to_string())))),
        }));
        assert_eq!(ctx.transpile_node(&node).unwrap(), "local x = 1\n");
    }

    #[test]
    fn variable_without_initializer_emits_bare_local() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let node = Node::new(NodeData::Variable(VariableDecl {
            name: "x".to_string(),
            initializer: None,
        }));
        assert_eq!(ctx.transpile_node(&node).unwrap(), "local x\n");
    }
}
