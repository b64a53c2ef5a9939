use thiserror::Error;

#[derive(Error)]
pub enum Error {
    #[error("symbolic_ir::Error{{ {err} }}")]
    Ir {
        #[from]
        err: symbolic_ir::Error,
    },

    #[error(
        "A program must designate at least one output node, \
         but an empty output list was provided."
    )]
    EmptyOutputList,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
