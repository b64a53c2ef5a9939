use std::sync::Arc;

use derive_more::derive::From;

use crate::{Kind, NodeThunk, PrimValue};

/// A value that is either concrete now, or symbolic until the solver
/// assigns it.  Concrete values never touch the expression graph;
/// symbolic values carry a lazily-forced handle to their graph node.
/// Operations produce new values and never mutate existing ones.
#[derive(Clone, From)]
pub enum SymbolicValue {
    Const(PrimValue),
    Node(NodeRef),
}

/// The symbolic half of a `SymbolicValue`: the value's kind plus a
/// shared thunk that inserts the node on first use.  Cloning shares
/// the thunk, so every copy of a value resolves to the same node.
#[derive(Clone)]
pub struct NodeRef {
    pub(crate) ty: Kind,
    pub(crate) thunk: Arc<NodeThunk>,
}

impl NodeRef {
    pub(crate) fn new(ty: Kind, thunk: NodeThunk) -> Self {
        Self {
            ty,
            thunk: Arc::new(thunk),
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.ty
    }

    pub fn thunk(&self) -> &NodeThunk {
        &self.thunk
    }
}

impl SymbolicValue {
    pub fn kind(&self) -> Kind {
        match self {
            SymbolicValue::Const(prim) => prim.kind(),
            SymbolicValue::Node(node_ref) => node_ref.ty.clone(),
        }
    }

    pub fn is_concrete(&self) -> bool {
        matches!(self, SymbolicValue::Const(_))
    }

    pub fn as_prim_value(&self) -> Option<PrimValue> {
        match self {
            SymbolicValue::Const(prim) => Some(*prim),
            SymbolicValue::Node(_) => None,
        }
    }

    pub fn as_node_ref(&self) -> Option<&NodeRef> {
        match self {
            SymbolicValue::Const(_) => None,
            SymbolicValue::Node(node_ref) => Some(node_ref),
        }
    }
}

impl std::fmt::Display for SymbolicValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolicValue::Const(prim) => write!(f, "{prim}"),
            SymbolicValue::Node(node_ref) => {
                write!(f, "<symbolic {}>", node_ref.ty)
            }
        }
    }
}

macro_rules! symbolic_value_from_prim {
    ($prim:ty) => {
        impl From<$prim> for SymbolicValue {
            fn from(prim: $prim) -> Self {
                Self::Const(prim.into())
            }
        }
    };
}
symbolic_value_from_prim!(bool);
symbolic_value_from_prim!(u8);
symbolic_value_from_prim!(u16);
symbolic_value_from_prim!(u32);
symbolic_value_from_prim!(u64);
symbolic_value_from_prim!(i8);
symbolic_value_from_prim!(i16);
symbolic_value_from_prim!(i32);
symbolic_value_from_prim!(i64);
symbolic_value_from_prim!(f32);
symbolic_value_from_prim!(f64);
