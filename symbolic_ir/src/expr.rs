use arrayvec::ArrayVec;

use crate::{Kind, NodeId, PrimValue};

/// Which side of a sum a constructor or accessor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SumSide {
    Left,
    Right,
}

impl std::fmt::Display for SumSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SumSide::Left => write!(f, "left"),
            SumSide::Right => write!(f, "right"),
        }
    }
}

/// One node of the expression graph: the operation descriptor plus
/// the kind of the value it produces.  Immutable once inserted.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Kind,
}

/// Operation descriptor with operand node handles.  `ExprKind` is the
/// structural hash-consing key: two insertions with equal descriptors
/// (same operation, same operands, in the same order) resolve to the
/// same node.  Commutative operations are not normalized; operand
/// order is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// A concrete literal, materialized only when it appears as an
    /// operand of a symbolic operation.
    Const(PrimValue),

    /// A named solver input.  The kind lives on the owning `Expr`;
    /// name uniqueness within a graph is enforced at declaration.
    FreeVar { name: String },

    Add { lhs: NodeId, rhs: NodeId },
    Sub { lhs: NodeId, rhs: NodeId },
    Mul { lhs: NodeId, rhs: NodeId },
    Div { lhs: NodeId, rhs: NodeId },
    Mod { lhs: NodeId, rhs: NodeId },

    BitAnd { lhs: NodeId, rhs: NodeId },
    BitOr { lhs: NodeId, rhs: NodeId },
    BitXor { lhs: NodeId, rhs: NodeId },

    And { lhs: NodeId, rhs: NodeId },
    Or { lhs: NodeId, rhs: NodeId },

    /// Logical negation on `Bool`, bitwise complement on integers.
    Not { arg: NodeId },

    Equal { lhs: NodeId, rhs: NodeId },
    NotEqual { lhs: NodeId, rhs: NodeId },
    LessThan { lhs: NodeId, rhs: NodeId },
    GreaterThan { lhs: NodeId, rhs: NodeId },
    LessThanOrEqual { lhs: NodeId, rhs: NodeId },
    GreaterThanOrEqual { lhs: NodeId, rhs: NodeId },

    /// The multiplexer: evaluates to `if_true` when `condition`
    /// holds at solve time, and to `if_false` otherwise.
    Select {
        condition: NodeId,
        if_true: NodeId,
        if_false: NodeId,
    },

    /// Injects a value into the named side of a sum.
    SumConstruct { side: SumSide, value: NodeId },

    /// Projects the payload out of a sum, asserting the named side.
    SumAccess { side: SumSide, sum: NodeId },

    /// Tests whether a sum currently holds the named side.
    SumIs { side: SumSide, sum: NodeId },
}

impl ExprKind {
    /// The operand handles, in operand order.  Maximum arity in the
    /// graph is three (the multiplexer).
    pub fn input_nodes(&self) -> ArrayVec<NodeId, 3> {
        let mut inputs = ArrayVec::new();
        match self {
            ExprKind::Const(_) | ExprKind::FreeVar { .. } => {}

            &ExprKind::Not { arg: value }
            | &ExprKind::SumConstruct { value, .. }
            | &ExprKind::SumAccess { sum: value, .. }
            | &ExprKind::SumIs { sum: value, .. } => {
                inputs.push(value);
            }

            &ExprKind::Add { lhs, rhs }
            | &ExprKind::Sub { lhs, rhs }
            | &ExprKind::Mul { lhs, rhs }
            | &ExprKind::Div { lhs, rhs }
            | &ExprKind::Mod { lhs, rhs }
            | &ExprKind::BitAnd { lhs, rhs }
            | &ExprKind::BitOr { lhs, rhs }
            | &ExprKind::BitXor { lhs, rhs }
            | &ExprKind::And { lhs, rhs }
            | &ExprKind::Or { lhs, rhs }
            | &ExprKind::Equal { lhs, rhs }
            | &ExprKind::NotEqual { lhs, rhs }
            | &ExprKind::LessThan { lhs, rhs }
            | &ExprKind::GreaterThan { lhs, rhs }
            | &ExprKind::LessThanOrEqual { lhs, rhs }
            | &ExprKind::GreaterThanOrEqual { lhs, rhs } => {
                inputs.push(lhs);
                inputs.push(rhs);
            }

            &ExprKind::Select {
                condition,
                if_true,
                if_false,
            } => {
                inputs.push(condition);
                inputs.push(if_true);
                inputs.push(if_false);
            }
        }
        inputs
    }

    pub fn op_name(&self) -> &'static str {
        match self {
            ExprKind::Const(_) => "const",
            ExprKind::FreeVar { .. } => "free_var",
            ExprKind::Add { .. } => "add",
            ExprKind::Sub { .. } => "sub",
            ExprKind::Mul { .. } => "mul",
            ExprKind::Div { .. } => "div",
            ExprKind::Mod { .. } => "mod",
            ExprKind::BitAnd { .. } => "bit_and",
            ExprKind::BitOr { .. } => "bit_or",
            ExprKind::BitXor { .. } => "bit_xor",
            ExprKind::And { .. } => "and",
            ExprKind::Or { .. } => "or",
            ExprKind::Not { .. } => "not",
            ExprKind::Equal { .. } => "equal",
            ExprKind::NotEqual { .. } => "not_equal",
            ExprKind::LessThan { .. } => "less_than",
            ExprKind::GreaterThan { .. } => "greater_than",
            ExprKind::LessThanOrEqual { .. } => "less_than_or_equal",
            ExprKind::GreaterThanOrEqual { .. } => {
                "greater_than_or_equal"
            }
            ExprKind::Select { .. } => "select",
            ExprKind::SumConstruct { .. } => "sum_construct",
            ExprKind::SumAccess { .. } => "sum_access",
            ExprKind::SumIs { .. } => "sum_is",
        }
    }
}
