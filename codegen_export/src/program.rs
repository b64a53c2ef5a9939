use arrayvec::ArrayVec;

use symbolic_ir::{Expr, ExprGraph, ExprKind, Kind, NodeId};

use crate::Error;

/// Read-only view of a finished graph, handed to the code generator.
///
/// Steps are restricted to the nodes the designated outputs reach,
/// and are listed in a topological order: every operand handle refers
/// to an earlier step.  The underlying graph is append-only, so a
/// `Program` stays valid for as long as its graph exists; all textual
/// emission is the consumer's concern.
pub struct Program {
    steps: Vec<ProgramStep>,
    outputs: Vec<NodeId>,
}

/// One definition in the program: the node handle, its operation, and
/// the kind of value it produces.
#[derive(Clone)]
pub struct ProgramStep {
    pub id: NodeId,
    pub expr: Expr,
}

impl ProgramStep {
    pub fn op(&self) -> &ExprKind {
        &self.expr.kind
    }

    pub fn operands(&self) -> ArrayVec<NodeId, 3> {
        self.expr.kind.input_nodes()
    }

    pub fn kind(&self) -> &Kind {
        &self.expr.ty
    }
}

impl Program {
    pub fn new(
        graph: &ExprGraph,
        outputs: &[NodeId],
    ) -> Result<Self, Error> {
        if outputs.is_empty() {
            return Err(Error::EmptyOutputList);
        }

        let reachable = graph.reachable(outputs.iter().cloned())?;
        let steps = graph
            .nodes()
            .into_iter()
            .filter(|(node_id, _)| reachable[node_id.index()])
            .map(|(id, expr)| ProgramStep { id, expr })
            .collect();

        Ok(Self {
            steps,
            outputs: outputs.to_vec(),
        })
    }

    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgramStep> + '_ {
        self.steps.iter()
    }

    /// The designated result nodes, in the order given at
    /// construction.
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    pub fn kind_of(&self, node_id: NodeId) -> Option<&Kind> {
        self.steps
            .iter()
            .find(|step| step.id == node_id)
            .map(|step| &step.expr.ty)
    }
}
