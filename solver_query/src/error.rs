use thiserror::Error;

use symbolic_ir::Kind;

#[derive(Error)]
pub enum Error {
    #[error("symbolic_ir::Error{{ {err} }}")]
    Ir {
        #[from]
        err: symbolic_ir::Error,
    },

    #[error(
        "Assertions must have kind Bool, \
         but an assertion of kind {0} was provided."
    )]
    AssertionMustBeBoolean(Kind),

    #[error("The external solver reported an error: {message}")]
    Solver { message: String },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
