use itertools::Itertools;

use crate::{ExprGraph, ExprKind};

impl std::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprKind::Const(prim) => write!(f, "const {prim}"),
            ExprKind::FreeVar { name } => {
                write!(f, "free_var \"{name}\"")
            }
            ExprKind::SumConstruct { side, value } => {
                write!(f, "sum_construct<{side}>({value})")
            }
            ExprKind::SumAccess { side, sum } => {
                write!(f, "sum_access<{side}>({sum})")
            }
            ExprKind::SumIs { side, sum } => {
                write!(f, "sum_is<{side}>({sum})")
            }
            other => write!(
                f,
                "{}({})",
                other.op_name(),
                other.input_nodes().iter().format(", ")
            ),
        }
    }
}

/// One node per line, in insertion order.  Intended for tests and
/// debugging output.
impl std::fmt::Display for ExprGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node_id, expr) in self.nodes() {
            writeln!(f, "{node_id} <- {}: {}", expr.kind, expr.ty)?;
        }
        Ok(())
    }
}
