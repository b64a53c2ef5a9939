use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier of one expression graph.  Lets a node
/// handle be checked against the store it is presented to, so that a
/// handle from a different or expired store is rejected rather than
/// silently resolving to an unrelated node.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Handle to one node within one expression graph.  Only the owning
/// graph can mint these; indices are assigned monotonically.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct NodeId {
    graph: GraphId,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    pub fn graph_id(self) -> GraphId {
        self.graph
    }

    pub fn index(self) -> usize {
        self.index
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.index)
    }
}
