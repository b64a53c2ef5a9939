use std::collections::HashSet;

use itertools::Itertools;

use symbolic_ir::{
    Expr, ExprGraph, ExprKind, FreeVarDecl, NodeId, SymbolicValue,
};

use crate::Error;

/// A finished graph serialized for the external solver: the free
/// variables it mentions (kind-tagged, in declaration order), the
/// node definitions restricted to what the assertions reach, and the
/// top-level assertion handles.  Definitions are listed in dependency
/// order, so every operand is defined before its first use.
pub struct SolverQuery {
    free_vars: Vec<FreeVarDecl>,
    defs: Vec<(NodeId, Expr)>,
    assertions: Vec<NodeId>,
}

impl SolverQuery {
    pub fn new(
        graph: &ExprGraph,
        assertions: &[SymbolicValue],
    ) -> Result<Self, Error> {
        let mut assertion_ids = Vec::with_capacity(assertions.len());
        for assertion in assertions {
            let ty = assertion.kind();
            if !ty.is_bool() {
                return Err(Error::AssertionMustBeBoolean(ty));
            }
            assertion_ids.push(graph.node_id(assertion)?);
        }

        let reachable = graph.reachable(assertion_ids.iter().cloned())?;

        // Ascending node index over the reachable subset.  The store
        // only accepts operands that already exist, so insertion
        // order is itself a dependency order.
        let defs: Vec<_> = graph
            .nodes()
            .into_iter()
            .filter(|(node_id, _)| reachable[node_id.index()])
            .collect();

        let used_names: HashSet<&str> = defs
            .iter()
            .filter_map(|(_, expr)| match &expr.kind {
                ExprKind::FreeVar { name } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        let free_vars = graph
            .free_var_decls()
            .into_iter()
            .filter(|decl| used_names.contains(decl.name.as_str()))
            .collect();

        Ok(Self {
            free_vars,
            defs,
            assertions: assertion_ids,
        })
    }

    pub fn free_vars(&self) -> &[FreeVarDecl] {
        &self.free_vars
    }

    pub fn defs(&self) -> &[(NodeId, Expr)] {
        &self.defs
    }

    pub fn assertions(&self) -> &[NodeId] {
        &self.assertions
    }
}

impl std::fmt::Display for SolverQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for decl in &self.free_vars {
            writeln!(f, "var \"{}\": {}", decl.name, decl.ty)?;
        }
        for (node_id, expr) in &self.defs {
            writeln!(f, "{node_id} <- {}: {}", expr.kind, expr.ty)?;
        }
        if !self.assertions.is_empty() {
            writeln!(
                f,
                "assert {}",
                self.assertions.iter().format(", ")
            )?;
        }
        Ok(())
    }
}
