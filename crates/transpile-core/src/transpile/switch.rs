//! Switch-statement lowering.
//!
//! ARCHITECTURE: the target language has no native `switch`/fallthrough, so
//! an SL `switch` is synthesized as a chain of `if`/`elseif`/`else` guarded by
//! equality tests against the scrutinee, with one label per clause and an
//! explicit `goto` forcing fall-through between adjacent clauses. `break`
//! inside a clause instead jumps to a trailing `::switchDone<id>::` label
//! (see `Context::transpile_node`'s `Break` arm).

use crate::ast::SwitchClause;
use crate::context::Context;
use crate::error::Result;

impl Context<'_> {
    pub(crate) fn transpile_switch(&mut self, s: &crate::ast::SwitchStmt) -> Result<String> {
        let clause_count = s.clauses.len() as u32;
        let base_id = self.next_switch_block(clause_count);
        let scrutinee = self.transpile_expr(&s.scrutinee, true)?;
        let base_indent = self.indent().to_string();

        let closure_indent = base_indent.clone();
        let body = self.with_switch_id(base_id, move |ctx| -> Result<String> {
            let base_indent = closure_indent;
            let mut out = String::new();
            let count = s.clauses.len();

            for (i, clause) in s.clauses.iter().enumerate() {
                match clause {
                    SwitchClause::Case { test, .. } => {
                        let test_tl = ctx.transpile_expr(test, true)?;
                        let keyword = if i == 0 { "if" } else { "elseif" };
                        out.push_str(&format!(
                            "{base_indent}{keyword} {scrutinee} == {test_tl} then\n"
                        ));
                    }
                    SwitchClause::Default { .. } => {
                        out.push_str(&format!("{base_indent}else\n"));
                    }
                }

                ctx.push_indent();
                let clause_id = base_id + i as u32;
                out.push_str(&format!("{}::switchCase{}::\n", ctx.indent(), clause_id));

                let clause_body = ctx.with_switch_clause(|ctx| -> Result<String> {
                    let mut inner = String::new();
                    for stmt in clause.body() {
                        inner.push_str(&ctx.transpile_node(stmt)?);
                    }
                    Ok(inner)
                })?;
                out.push_str(&clause_body);

                if i + 1 < count {
                    out.push_str(&format!(
                        "{}goto switchCase{}\n",
                        ctx.indent(),
                        clause_id + 1
                    ));
                }
                ctx.pop_indent();
            }

            out.push_str(&format!("{base_indent}end\n"));
            Ok(out)
        })?;

        Ok(format!(
            "{body}{indent}::switchDone{base_id}::\n",
            indent = self.indent()
        ))
    }
}
