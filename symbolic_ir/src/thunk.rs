use std::sync::{Condvar, Mutex};

use crate::{Error, ExprGraph, GraphId, NodeId};

type ForceFn = Box<dyn FnOnce(&ExprGraph) -> Result<NodeId, Error> + Send>;

/// Explicit call-by-need cell for deferred graph insertion.
///
/// The closure runs at most once, no matter how many values share the
/// thunk or how many threads force it simultaneously.  A force that
/// arrives while another thread's force is in flight blocks until the
/// winner finishes, then observes the winner's result.  A failure is
/// cached permanently: every later force returns the same error
/// rather than retrying against partially-built state.
pub struct NodeThunk {
    graph: GraphId,
    state: Mutex<ThunkState>,
    on_forced: Condvar,
}

enum ThunkState {
    Unforced(ForceFn),
    Forcing,
    Forced(NodeId),
    Failed(Error),
}

impl NodeThunk {
    pub(crate) fn new<Func>(graph: GraphId, func: Func) -> Self
    where
        Func: FnOnce(&ExprGraph) -> Result<NodeId, Error> + Send + 'static,
    {
        Self {
            graph,
            state: Mutex::new(ThunkState::Unforced(Box::new(func))),
            on_forced: Condvar::new(),
        }
    }

    /// The graph this thunk may insert into.
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    pub fn force(&self, graph: &ExprGraph) -> Result<NodeId, Error> {
        if graph.graph_id() != self.graph {
            return Err(Error::InvalidGraphHandle {
                expected: self.graph,
                found: graph.graph_id(),
            });
        }

        let func = {
            let mut state = self.state.lock().unwrap();
            loop {
                match &*state {
                    ThunkState::Forced(node_id) => return Ok(*node_id),
                    ThunkState::Failed(err) => return Err(err.clone()),
                    ThunkState::Forcing => {
                        state = self.on_forced.wait(state).unwrap();
                    }
                    ThunkState::Unforced(_) => break,
                }
            }
            let ThunkState::Unforced(func) =
                std::mem::replace(&mut *state, ThunkState::Forcing)
            else {
                panic!("Internal error, state was checked to be Unforced")
            };
            func
        };

        // The closure runs without holding the state lock, so it may
        // recursively force operand thunks and insert into the graph.
        let result = func(graph);

        let mut state = self.state.lock().unwrap();
        *state = match &result {
            Ok(node_id) => ThunkState::Forced(*node_id),
            Err(err) => ThunkState::Failed(err.clone()),
        };
        self.on_forced.notify_all();
        result
    }
}
