//! Expression translation.
//!
//! ARCHITECTURE: one method per expression shape, dispatched from
//! `Context::transpile_expr`'s top-level match. Every helper returns a TL
//! expression fragment with no trailing newline; callers decide bracketing.

use crate::ast::{CallExpr, Node, NodeData, ObjectProperty, PropertyAccessExpr, PropertyKey};
use crate::context::Context;
use crate::error::{Result, TranslationError};
use crate::query;

fn wrap(bracket: bool, s: String) -> String {
    if bracket { format!("({s})") } else { s }
}

/// Rewrite the last `.` in a translated callee into `:`, TL's method-call
/// syntax. A callee with no `.` (a bare identifier) passes through.
fn to_colon_call(s: &str) -> String {
    match s.rfind('.') {
        Some(idx) => format!("{}:{}", &s[..idx], &s[idx + 1..]),
        None => s.to_string(),
    }
}

impl Context<'_> {
    /// Translate an SL expression node into TL text. `bracket` wraps the
    /// result in parentheses, for operand and scrutinee/case-constant sites
    /// where precedence could otherwise change meaning. Primary expressions
    /// (identifiers, literals, calls, indexing, construction) ignore it -
    /// only a `Binary`/`Conditional` result can create the kind of
    /// precedence surprise bracketing guards against.
    pub(crate) fn transpile_expr(&mut self, node: &Node, bracket: bool) -> Result<String> {
        match &node.data {
            NodeData::Binary(b) => self.transpile_binary(&b.op, &b.left, &b.right, bracket),
            NodeData::Unary(u) => self.transpile_unary(&u.op, &u.operand, node),
            NodeData::Conditional(c) => {
                let cond = self.transpile_expr(&c.cond, false)?;
                let then_expr = self.transpile_expr(&c.then_expr, false)?;
                let else_expr = self.transpile_expr(&c.else_expr, false)?;
                Ok(wrap(
                    bracket,
                    format!(
                        "ITE({cond}, function() return {then_expr} end, function() return {else_expr} end)"
                    ),
                ))
            }
            // Primary expressions (atoms, calls, indexing, construction) bind
            // tighter than any SL operator, so `bracket` never applies to
            // them - only Binary/Conditional results can create precedence
            // surprises that need parenthesizing.
            NodeData::Call(c) => self.transpile_call(c, node),
            NodeData::New(c) => {
                let callee = self.transpile_expr(&c.callee, false)?;
                let args = self.transpile_args(&c.args)?;
                Ok(format!("{callee}({args})"))
            }
            NodeData::PropertyAccess(p) => self.transpile_property_access(p, node),
            NodeData::ElementAccess(e) => {
                let receiver_ty = self.checker.type_at(&e.object);
                let object = self.transpile_expr(&e.object, false)?;
                let index = self.transpile_expr(&e.index, false)?;
                if query::is_array_type(self.checker, &receiver_ty) {
                    Ok(format!("{object}[{index}+1]"))
                } else {
                    Ok(format!("{object}[{index}]"))
                }
            }
            NodeData::Identifier(name) => Ok(name.clone()),
            NodeData::StringLiteral(text) => {
                let quote = self.config.quote_char;
                Ok(format!("{quote}{text}{quote}"))
            }
            NodeData::NumericLiteral(text) => Ok(text.clone()),
            NodeData::True => Ok("true".to_string()),
            NodeData::False => Ok("false".to_string()),
            NodeData::ArrayLiteral(items) => {
                let items_tl = self.transpile_args(items)?;
                Ok(format!("{{{items_tl}}}"))
            }
            NodeData::ObjectLiteral(props) => {
                let body = self.transpile_object_properties(props)?;
                Ok(format!("{{{body}}}"))
            }
            NodeData::FunctionExpr(f) => {
                let params = f
                    .params
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                self.push_indent();
                let body = self.transpile_block(&f.body)?;
                self.pop_indent();
                Ok(format!("function({params}) {body} end "))
            }
            NodeData::TypeAssertion(inner) => self.transpile_expr(inner, bracket),
            _ => Err(TranslationError::UnsupportedNode {
                kind: node.kind(),
                node: node.clone(),
            }),
        }
    }

    /// Comma-joined translation of an argument/element list.
    pub(crate) fn transpile_args(&mut self, args: &[Node]) -> Result<String> {
        let mut parts = Vec::with_capacity(args.len());
        for arg in args {
            parts.push(self.transpile_expr(arg, false)?);
        }
        Ok(parts.join(", "))
    }

    fn transpile_binary(
        &mut self,
        op: &str,
        left: &Node,
        right: &Node,
        bracket: bool,
    ) -> Result<String> {
        // Assignment targets an lvalue; it must not be parenthesized and the
        // whole form is never itself bracketed.
        if op == "+=" || op == "-=" {
            let left_tl = self.transpile_expr(left, false)?;
            let right_tl = self.transpile_expr(right, true)?;
            let arith = if op == "+=" { "+" } else { "-" };
            return Ok(format!("{left_tl} = {left_tl} {arith} {right_tl}"));
        }
        if op == "=" {
            let left_tl = self.transpile_expr(left, false)?;
            let right_tl = self.transpile_expr(right, true)?;
            return Ok(format!("{left_tl} = {right_tl}"));
        }

        let left_tl = self.transpile_expr(left, true)?;
        let right_tl = self.transpile_expr(right, true)?;
        let result = match op {
            "&&" => format!("{left_tl} and {right_tl}"),
            "||" => format!("{left_tl} or {right_tl}"),
            "&" => format!("bit.band({left_tl}, {right_tl})"),
            "|" => format!("bit.bor({left_tl}, {right_tl})"),
            "===" => format!("{left_tl} == {right_tl}"),
            "!=" | "!==" => format!("{left_tl} ~= {right_tl}"),
            other => format!("{left_tl} {other} {right_tl}"),
        };
        Ok(wrap(bracket, result))
    }

    fn transpile_unary(&mut self, op: &str, operand: &Node, node: &Node) -> Result<String> {
        match op {
            "++" => {
                let operand_tl = self.transpile_expr(operand, false)?;
                Ok(format!("{operand_tl} = {operand_tl} + 1"))
            }
            "--" => {
                let operand_tl = self.transpile_expr(operand, false)?;
                Ok(format!("{operand_tl} = {operand_tl} - 1"))
            }
            "!" => {
                let operand_tl = self.transpile_expr(operand, true)?;
                Ok(format!("not {operand_tl}"))
            }
            other => Err(TranslationError::UnsupportedOperator {
                operator: other.to_string(),
                node: node.clone(),
            }),
        }
    }

    fn transpile_call(&mut self, call: &CallExpr, node: &Node) -> Result<String> {
        if let NodeData::PropertyAccess(p) = &call.callee.data {
            let receiver_ty = self.checker.type_at(&p.object);
            if receiver_ty.is_string() {
                return self.transpile_string_call(&p.name, &p.object, &call.args, node);
            }
            if query::is_array_type(self.checker, &receiver_ty) {
                return self.transpile_array_call(&p.name, &p.object, &call.args, node);
            }
        }

        let callee = self.transpile_expr(&call.callee, false)?;
        let callee = to_colon_call(&callee);
        let args = self.transpile_args(&call.args)?;
        Ok(format!("{callee}({args})"))
    }

    fn transpile_string_call(
        &mut self,
        method: &str,
        receiver: &Node,
        args: &[Node],
        node: &Node,
    ) -> Result<String> {
        if method != "replace" {
            return Err(TranslationError::UnsupportedMethod {
                receiver_kind: "string",
                name: method.to_string(),
                node: node.clone(),
            });
        }
        let receiver_tl = self.transpile_expr(receiver, false)?;
        let args_tl = self.transpile_args(args)?;
        Ok(format!("{receiver_tl}:sub({args_tl})"))
    }

    fn transpile_array_call(
        &mut self,
        method: &str,
        receiver: &Node,
        args: &[Node],
        node: &Node,
    ) -> Result<String> {
        if method != "push" {
            return Err(TranslationError::UnsupportedMethod {
                receiver_kind: "array",
                name: method.to_string(),
                node: node.clone(),
            });
        }
        let receiver_tl = self.transpile_expr(receiver, false)?;
        let args_tl = self.transpile_args(args)?;
        Ok(format!("table.insert({receiver_tl}, {args_tl})"))
    }

    fn transpile_property_access(
        &mut self,
        p: &PropertyAccessExpr,
        node: &Node,
    ) -> Result<String> {
        let receiver_ty = self.checker.type_at(&p.object);

        if receiver_ty.is_string() || query::is_array_type(self.checker, &receiver_ty) {
            if p.name == "length" {
                let receiver_tl = self.transpile_expr(&p.object, false)?;
                return Ok(format!("#{receiver_tl}"));
            }
            let receiver_kind = if receiver_ty.is_string() { "string" } else { "array" };
            return Err(TranslationError::UnsupportedProperty {
                receiver_kind,
                name: p.name.clone(),
                node: node.clone(),
            });
        }

        match &p.object.data {
            NodeData::Identifier(name) if name == "this" => Ok(format!("self.{}", p.name)),
            NodeData::Identifier(_) if receiver_ty.symbol_has_enum_flag() => Ok(p.name.clone()),
            NodeData::Identifier(name) => Ok(format!("{name}.{}", p.name)),
            NodeData::StringLiteral(_)
            | NodeData::NumericLiteral(_)
            | NodeData::True
            | NodeData::False
            | NodeData::ArrayLiteral(_)
            | NodeData::ObjectLiteral(_)
            | NodeData::Call(_)
            | NodeData::PropertyAccess(_) => {
                let receiver_tl = self.transpile_expr(&p.object, false)?;
                Ok(format!("{receiver_tl}.{}", p.name))
            }
            _ => Err(TranslationError::UnsupportedProperty {
                receiver_kind: query::node_kind_label(p.object.kind()),
                name: p.name.clone(),
                node: node.clone(),
            }),
        }
    }

    fn transpile_object_properties(&mut self, props: &[ObjectProperty]) -> Result<String> {
        let mut parts = Vec::with_capacity(props.len());
        for prop in props {
            match prop {
                ObjectProperty::KeyValue { key, value } => {
                    let value_tl = self.transpile_expr(value, false)?;
                    let key_tl = match key {
                        PropertyKey::Identifier(name) => format!("\"{name}\""),
                        PropertyKey::Computed(expr) => self.transpile_expr(expr, false)?,
                    };
                    parts.push(format!("[{key_tl}]={value_tl}"));
                }
                ObjectProperty::Shorthand(name) => {
                    parts.push(format!("[\"{name}\"]={name}"));
                }
            }
        }
        Ok(parts.join(", "))
    }
}
