use crate::{Error, ExprGraph, NodeId};

impl ExprGraph {
    /// Determine which nodes are used by some node.
    ///
    /// Given a set of initial nodes, returns a boolean vector of size
    /// `self.num_nodes()`, indexed by node index.  An element is
    /// `true` when one or more of the initial nodes depends on the
    /// node at that index.
    pub fn reachable(
        &self,
        initial: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<bool>, Error> {
        let nodes = self.nodes();

        let mut reachable = vec![false; nodes.len()];
        let mut to_visit = Vec::new();
        for node_id in initial {
            self.check_handle(node_id)?;
            if !reachable[node_id.index()] {
                reachable[node_id.index()] = true;
                to_visit.push(node_id.index());
            }
        }

        while let Some(visiting) = to_visit.pop() {
            let (_, expr) = &nodes[visiting];
            for upstream in expr.kind.input_nodes() {
                if !reachable[upstream.index()] {
                    reachable[upstream.index()] = true;
                    to_visit.push(upstream.index());
                }
            }
        }

        Ok(reachable)
    }
}
