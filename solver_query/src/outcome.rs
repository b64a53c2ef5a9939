use std::collections::HashMap;

use symbolic_ir::PrimValue;

/// Verdict returned by the external solver for one query.
#[derive(Debug, Clone)]
pub enum SolverOutcome {
    /// The assertions can hold simultaneously; the model assigns a
    /// concrete value to each free variable.
    Satisfiable(Model),

    Unsatisfiable,

    /// The solver gave up (timeout, incomplete theory, ...).
    Unknown,
}

impl SolverOutcome {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SolverOutcome::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SolverOutcome::Satisfiable(model) => Some(model),
            _ => None,
        }
    }
}

/// Assignment of concrete values to free variables, keyed by the
/// stable external name given at declaration.
#[derive(Debug, Clone, Default)]
pub struct Model {
    assignments: HashMap<String, PrimValue>,
}

impl Model {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn assign(
        &mut self,
        name: impl Into<String>,
        value: PrimValue,
    ) {
        self.assignments.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<PrimValue> {
        self.assignments.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PrimValue)> + '_ {
        self.assignments
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}
