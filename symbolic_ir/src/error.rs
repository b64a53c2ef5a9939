use thiserror::Error;

use crate::{GraphId, Kind};

#[derive(Error, Clone)]
pub enum Error {
    #[error(
        "Binary operations require both operands \
         to have the same kind.  \
         However, the operands have kinds {lhs} and {rhs}."
    )]
    KindMismatch { lhs: Kind, rhs: Kind },

    #[error(
        "Both branches of a symbolic conditional \
         must produce values of the same kind.  \
         However, the if-branch has kind {if_branch} \
         and the else-branch has kind {else_branch}."
    )]
    BranchKindMismatch { if_branch: Kind, else_branch: Kind },

    #[error(
        "The condition of a symbolic conditional must have kind Bool, \
         but a condition of kind {0} was provided."
    )]
    ConditionMustBeBoolean(Kind),

    #[error(
        "The '{op}' operation is not defined \
         for operands of kind {kind}."
    )]
    UnsupportedOperandKind { op: &'static str, kind: Kind },

    #[error(
        "The '{op}' operation may only be applied \
         to values of a sum kind, \
         but was applied to a value of kind {kind}."
    )]
    SumOperationRequiresSumKind { op: &'static str, kind: Kind },

    #[error("Attempted concrete division or remainder by zero.")]
    DivisionByZero,

    #[error(
        "Node handle from graph {found} \
         was used against graph {expected}.  \
         Node identifiers are only valid \
         within the graph that created them."
    )]
    InvalidGraphHandle { expected: GraphId, found: GraphId },

    #[error(
        "A free variable named '{0}' \
         has already been declared within this graph."
    )]
    DuplicateFreeVariableName(String),

    #[error(
        "Invalid free variable name: '{0}'.  \
         Names must be non-empty and may not begin with a digit."
    )]
    InvalidFreeVariableName(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
