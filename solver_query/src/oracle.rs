use crate::{Error, SolverOutcome, SolverQuery};

/// The external constraint solver, treated as a black box.
///
/// An implementation typically serializes the query into the wire
/// dialect of a specific solver process and parses its reply.  A
/// diagnostic reported by the solver surfaces verbatim as
/// `Error::Solver`; this layer never retries on the caller's behalf.
pub trait SolverOracle {
    fn check(
        &mut self,
        query: &SolverQuery,
    ) -> Result<SolverOutcome, Error>;
}
