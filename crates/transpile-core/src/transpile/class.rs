//! Class declaration lowering.
//!
//! ARCHITECTURE: a class becomes an idempotently-initialized table plus a
//! `:constructor` method and colon-dispatched instance methods. Emission
//! order is fixed — table init, static fields, constructor, methods —
//! regardless of the source order of members.

use crate::ast::{ClassDecl, Parameter};
use crate::context::Context;
use crate::error::Result;

impl Context<'_> {
    pub(crate) fn transpile_class(&mut self, class: &ClassDecl) -> Result<String> {
        let name = &class.name;
        let mut out = String::new();
        out.push_str(&format!("{}{name} = {name} or {{}}\n", self.indent()));

        for prop in &class.properties {
            if !prop.modifiers.is_static {
                continue;
            }
            if let Some(init) = &prop.initializer {
                let init_tl = self.transpile_expr(init, false)?;
                out.push_str(&format!(
                    "{}{name}.{} = {init_tl}\n",
                    self.indent(),
                    prop.name
                ));
            }
        }

        let instance_fields: Vec<_> = class
            .properties
            .iter()
            .filter(|p| !p.modifiers.is_static && p.initializer.is_some())
            .collect();

        match &class.constructor {
            Some(ctor) => {
                let params = join_params(&ctor.params);
                out.push_str(&format!("{}function {name}:constructor({params})\n", self.indent()));
                self.push_indent();
                out.push_str(&self.transpile_instance_field_inits(&instance_fields)?);
                out.push_str(&self.transpile_block(&ctor.body)?);
                self.pop_indent();
                out.push_str(&format!("{}end\n", self.indent()));
            }
            None if !instance_fields.is_empty() => {
                out.push_str(&format!("{}function {name}:constructor()\n", self.indent()));
                self.push_indent();
                out.push_str(&self.transpile_instance_field_inits(&instance_fields)?);
                self.pop_indent();
                out.push_str(&format!("{}end\n", self.indent()));
            }
            None => {}
        }

        for method in &class.methods {
            let params = join_params(&method.params);
            out.push_str(&format!(
                "{}function {name}:{}({params})\n",
                self.indent(),
                method.name
            ));
            self.push_indent();
            out.push_str(&self.transpile_block(&method.body)?);
            self.pop_indent();
            out.push_str(&format!("{}end\n", self.indent()));
        }

        Ok(out)
    }

    fn transpile_instance_field_inits(
        &mut self,
        fields: &[&crate::ast::PropertyDecl],
    ) -> Result<String> {
        let mut out = String::new();
        for field in fields {
            let Some(init) = &field.initializer else {
                continue;
            };
            let init_tl = self.transpile_expr(init, false)?;
            out.push_str(&format!("{}self.{} = {init_tl}\n", self.indent(), field.name));
        }
        Ok(out)
    }
}

fn join_params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Unwrapping is acceptable in tests
mod tests {
    use super::*;
    use crate::ast::{ConstructorDecl, MethodDecl, Modifiers, Node, NodeData, PropertyDecl};
    use crate::checker::FixtureChecker;
    use crate::types::TranspileConfig;

    fn num(text: &str) -> Node {
        Node::new(NodeData::NumericLiteral(text.to_string()))
    }

    #[test]
    fn table_init_is_idempotent_and_comes_first() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let class = ClassDecl {
            name: "Point".to_string(),
            modifiers: Modifiers::default(),
            properties: vec![],
            constructor: None,
            methods: vec![],
        };
        let out = ctx.transpile_class(&class).unwrap();
        assert_eq!(out, "Point = Point or {}\n");
    }

    #[test]
    fn static_fields_use_dot_dispatch() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let class = ClassDecl {
            name: "Counter".to_string(),
            modifiers: Modifiers::default(),
            properties: vec![PropertyDecl {
                name: "total".to_string(),
                modifiers: Modifiers {
                    is_declare: false,
                    is_static: true,
                },
                initializer: Some(num("0")),
            }],
            constructor: None,
            methods: vec![],
        };
        let out = ctx.transpile_class(&class).unwrap();
        assert!(out.contains("Counter.total = 0\n"));
    }

    #[test]
    fn missing_constructor_is_synthesized_when_instance_fields_exist() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let class = ClassDecl {
            name: "Point".to_string(),
            modifiers: Modifiers::default(),
            properties: vec![PropertyDecl {
                name: "x".to_string(),
                modifiers: Modifiers::default(),
                initializer: Some(num("0")),
            }],
            constructor: None,
            methods: vec![],
        };
        let out = ctx.transpile_class(&class).unwrap();
        assert!(out.contains("function Point:constructor()\n"));
        assert!(out.contains("self.x = 0\n"));
    }

    #[test]
    fn missing_constructor_with_no_instance_fields_emits_nothing_extra() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let class = ClassDecl {
            name: "Empty".to_string(),
            modifiers: Modifiers::default(),
            properties: vec![],
            constructor: None,
            methods: vec![],
        };
        let out = ctx.transpile_class(&class).unwrap();
        assert!(!out.contains("constructor"));
    }

    #[test]
    fn declared_constructor_gets_field_inits_prepended() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let class = ClassDecl {
            name: "Point".to_string(),
            modifiers: Modifiers::default(),
            properties: vec![PropertyDecl {
                name: "x".to_string(),
                modifiers: Modifiers::default(),
                initializer: Some(num("0")),
            }],
            constructor: Some(ConstructorDecl {
                params: vec![],
                body: vec![Node::new(NodeData::Break)],
            }),
            methods: vec![],
        };
        let out = ctx.transpile_class(&class).unwrap();
        let field_pos = out.find("self.x = 0").unwrap();
        let body_pos = out.find("break").unwrap();
        assert!(field_pos < body_pos);
    }

    #[test]
    fn methods_use_colon_dispatch() {
        let checker = FixtureChecker::new();
        let mut ctx = Context::new(&checker, TranspileConfig::default());
        let class = ClassDecl {
            name: "Point".to_string(),
            modifiers: Modifiers::default(),
            properties: vec![],
            constructor: None,
            methods: vec![MethodDecl {
                name: "distance".to_string(),
                params: vec![],
                body: vec![],
            }],
        };
        let out = ctx.transpile_class(&class).unwrap();
        assert!(out.contains("function Point:distance()\n"));
    }
}
