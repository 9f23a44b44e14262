//! Classical `for` header analysis.
//!
//! ARCHITECTURE: a target numeric `for` takes `start, end, step`; SL's
//! `for(init; cond; incr)` header only maps onto one when `cond` and `incr`
//! have one of a handful of recognized shapes. Kept separate from
//! `transpile::mod` because the recognition logic is pure pattern matching
//! over the condition/increment nodes, unrelated to statement emission.

use crate::ast::{Node, NodeData};
use crate::context::Context;
use crate::error::{Result, TranslationError};

/// Extract the TL `end` bound from a classical `for`'s condition.
///
/// Recognizes `v < N`, `v <= N`, `v > N`, `v >= N` where `v` is the loop
/// variable; anything else is an unsupported header.
pub(crate) fn get_for_end(ctx: &mut Context, cond: &Node) -> Result<String> {
    let NodeData::Binary(bin) = &cond.data else {
        return Err(TranslationError::UnsupportedForHeader {
            node: cond.clone(),
        });
    };

    let bound = ctx.transpile_expr(&bin.right, false)?;
    match bin.op.as_str() {
        "<" => Ok(format!("{bound}-1")),
        "<=" => Ok(bound),
        ">" => Ok(format!("{bound}+1")),
        ">=" => Ok(bound),
        _ => Err(TranslationError::UnsupportedForHeader {
            node: cond.clone(),
        }),
    }
}

/// Extract the TL `step` from a classical `for`'s incrementor.
///
/// Recognizes `v++`, `v--`, `v += k`, `v -= k`; anything else is an
/// unsupported header.
pub(crate) fn get_for_step(ctx: &mut Context, incr: &Node) -> Result<String> {
    match &incr.data {
        NodeData::Unary(u) if u.op == "++" => Ok("1".to_string()),
        NodeData::Unary(u) if u.op == "--" => Ok("-1".to_string()),
        NodeData::Binary(bin) if bin.op == "+=" => ctx.transpile_expr(&bin.right, false),
        NodeData::Binary(bin) if bin.op == "-=" => {
            let step = ctx.transpile_expr(&bin.right, false)?;
            Ok(format!("-{step}"))
        }
        _ => Err(TranslationError::UnsupportedForHeader {
            node: incr.clone(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Unwrapping is acceptable in tests
mod tests {
    use super::*;
    use crate::ast::{BinaryExpr, UnaryExpr};
    use crate::checker::FixtureChecker;
    use crate::types::TranspileConfig;

    fn ident(name: &str) -> Node {
        Node::new(NodeData::Identifier(name.to_string()))
    }

    fn num(text: &str) -> Node {
        Node::new(NodeData::NumericLiteral(text.to_string()))
    }

    fn binary(op: &str, left: Node, right: Node) -> Node {
        Node::new(NodeData::Binary(BinaryExpr {
            op: op.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn new_ctx() -> (FixtureChecker, TranspileConfig) {
        (FixtureChecker::new(), TranspileConfig::default())
    }

    #[test]
    fn less_than_bound_is_inclusive_adjusted() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let cond = binary("<", ident("i"), num("10"));
        assert_eq!(get_for_end(&mut ctx, &cond).unwrap(), "10-1");
    }

    #[test]
    fn less_equal_bound_is_exact() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let cond = binary("<=", ident("i"), num("10"));
        assert_eq!(get_for_end(&mut ctx, &cond).unwrap(), "10");
    }

    #[test]
    fn greater_than_bound_is_adjusted() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let cond = binary(">", ident("i"), num("0"));
        assert_eq!(get_for_end(&mut ctx, &cond).unwrap(), "0+1");
    }

    #[test]
    fn unrecognized_condition_is_rejected() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let cond = binary("==", ident("i"), num("0"));
        assert!(matches!(
            get_for_end(&mut ctx, &cond),
            Err(TranslationError::UnsupportedForHeader { .. })
        ));
    }

    #[test]
    fn increment_step_is_one() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let incr = Node::new(NodeData::Unary(UnaryExpr {
            op: "++".to_string(),
            operand: Box::new(ident("i")),
            prefix: false,
        }));
        assert_eq!(get_for_step(&mut ctx, &incr).unwrap(), "1");
    }

    #[test]
    fn decrement_step_is_negative_one() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let incr = Node::new(NodeData::Unary(UnaryExpr {
            op: "--".to_string(),
            operand: Box::new(ident("i")),
            prefix: false,
        }));
        assert_eq!(get_for_step(&mut ctx, &incr).unwrap(), "-1");
    }

    #[test]
    fn compound_assign_step_is_negated_for_minus() {
        let (checker, config) = new_ctx();
        let mut ctx = Context::new(&checker, config);
        let incr = binary("-=", ident("i"), num("2"));
        assert_eq!(get_for_step(&mut ctx, &incr).unwrap(), "-2");
    }
}
