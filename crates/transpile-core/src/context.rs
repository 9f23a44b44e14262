//! Emission state threaded through one transpile.
//!
//! ARCHITECTURE: the indent string, switch counter, and switch flag are the
//! *only* mutable state in the engine. `Context` holds them explicitly — no
//! process-wide globals — alongside a borrowed type-checker and the injected
//! [`TranspileConfig`]. One `Context` is built per source file and discarded
//! after a single `transpile_source_file` call.

use crate::checker::TypeChecker;
use crate::types::TranspileConfig;

pub struct Context<'a> {
    pub(crate) checker: &'a dyn TypeChecker,
    pub(crate) config: TranspileConfig,
    indent: String,
    switch_counter: u32,
    in_switch: bool,
    switch_id_stack: Vec<u32>,
}

impl<'a> Context<'a> {
    pub fn new(checker: &'a dyn TypeChecker, config: TranspileConfig) -> Self {
        Self {
            checker,
            config,
            indent: String::new(),
            switch_counter: 0,
            in_switch: false,
            switch_id_stack: Vec::new(),
        }
    }

    /// The current indentation prefix.
    pub(crate) fn indent(&self) -> &str {
        &self.indent
    }

    /// Enter one more level of lexical nesting.
    pub(crate) fn push_indent(&mut self) {
        self.indent.push_str(&" ".repeat(self.config.indent_width));
    }

    /// Leave one level of lexical nesting.
    pub(crate) fn pop_indent(&mut self) {
        let new_len = self.indent.len().saturating_sub(self.config.indent_width);
        self.indent.truncate(new_len);
    }

    /// Allocate `count` switch-label slots and return the first id; the
    /// caller addresses labels `first_id .. first_id + count` for the
    /// clauses of one switch statement.
    pub(crate) fn next_switch_block(&mut self, count: u32) -> u32 {
        let id = self.switch_counter;
        self.switch_counter += count;
        id
    }

    /// `true` while emitting a switch clause's statements, which changes the
    /// meaning of `break`.
    pub(crate) fn in_switch(&self) -> bool {
        self.in_switch
    }

    /// Enter a switch's own scope for the duration of `f`, making `id` the
    /// target of any `break` emitted directly in one of its clauses (as
    /// opposed to a clause of a switch nested inside it).
    pub(crate) fn with_switch_id<T>(&mut self, id: u32, f: impl FnOnce(&mut Self) -> T) -> T {
        self.switch_id_stack.push(id);
        let result = f(self);
        self.switch_id_stack.pop();
        result
    }

    /// The base id of the innermost switch currently being emitted, if any.
    pub(crate) fn current_switch_id(&self) -> Option<u32> {
        self.switch_id_stack.last().copied()
    }

    /// Run `f` with `in_switch` set to `true`, restoring the prior value
    /// afterward. A nested switch inside a clause body calls this again
    /// around its own clauses, so resuming the outer clause after a fully
    /// emitted nested switch still sees `in_switch == true`.
    pub(crate) fn with_switch_clause<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.in_switch;
        self.in_switch = true;
        let result = f(self);
        self.in_switch = saved;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::FixtureChecker;

    #[test]
    fn indent_push_pop_is_four_spaces() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        assert_eq!(ctx.indent(), "");
        ctx.push_indent();
        assert_eq!(ctx.indent(), "    ");
        ctx.push_indent();
        assert_eq!(ctx.indent(), "        ");
        ctx.pop_indent();
        assert_eq!(ctx.indent(), "    ");
    }

    #[test]
    fn switch_counter_advances_by_clause_count() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let first = ctx.next_switch_block(3);
        assert_eq!(first, 0);
        let second = ctx.next_switch_block(2);
        assert_eq!(second, 3);
    }

    #[test]
    fn nested_switch_clause_restores_outer_flag() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        ctx.with_switch_clause(|ctx| {
            assert!(ctx.in_switch());
            // Simulate a nested switch: enter and fully leave its own clause.
            ctx.with_switch_clause(|ctx| {
                assert!(ctx.in_switch());
            });
            // Outer clause resumes and must still see in_switch == true.
            assert!(ctx.in_switch());
        });
        assert!(!ctx.in_switch());
    }

    #[test]
    fn switch_id_stack_tracks_innermost_switch() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        assert_eq!(ctx.current_switch_id(), None);
        ctx.with_switch_id(0, |ctx| {
            assert_eq!(ctx.current_switch_id(), Some(0));
            ctx.with_switch_id(2, |ctx| {
                assert_eq!(ctx.current_switch_id(), Some(2));
            });
            assert_eq!(ctx.current_switch_id(), Some(0));
        });
        assert_eq!(ctx.current_switch_id(), None);
    }
}
