use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    Error, Expr, ExprKind, GraphId, Kind, NodeId, NodeRef, NodeThunk,
    PrimValue, SumSide, SymbolicValue,
};

/// The run-scoped owner of all expression nodes.  Append-only: nodes
/// are never mutated or deleted once inserted, so node handles may be
/// shared freely across lazily-evaluated branches.  All mutation is
/// funneled through `intern`, which either returns the handle of a
/// structurally identical node or creates one, atomically.
pub struct ExprGraph {
    id: GraphId,
    state: Mutex<GraphState>,
}

#[derive(Default)]
struct GraphState {
    nodes: Vec<Expr>,
    dedup: HashMap<ExprKind, NodeId>,
    free_vars: Vec<FreeVarDecl>,
    free_var_ordinals: HashMap<String, usize>,
}

/// Declaration of one solver input: the stable external name used in
/// solver serialization and generated-code parameter naming, plus the
/// declared kind.  Ordered by declaration within the owning graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeVarDecl {
    pub name: String,
    pub ty: Kind,
}

/// Which kinds a binary operation accepts, and what it produces.
#[derive(Clone, Copy)]
enum OpFamily {
    Arithmetic,
    Bitwise,
    Boolean,
    Equality,
    Ordering,
}

impl OpFamily {
    fn result_kind(
        self,
        op: &'static str,
        lhs: &Kind,
        rhs: &Kind,
    ) -> Result<Kind, Error> {
        if lhs != rhs {
            return Err(Error::KindMismatch {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
            });
        }

        let supported = match self {
            OpFamily::Arithmetic => lhs.is_numeric(),
            OpFamily::Bitwise => lhs.is_integer(),
            OpFamily::Boolean => lhs.is_bool(),
            OpFamily::Equality => !lhs.is_sum(),
            OpFamily::Ordering => lhs.is_numeric(),
        };
        if !supported {
            return Err(Error::UnsupportedOperandKind {
                op,
                kind: lhs.clone(),
            });
        }

        Ok(match self {
            OpFamily::Equality | OpFamily::Ordering => Kind::Bool,
            _ => lhs.clone(),
        })
    }
}

macro_rules! binary_op {
    ($name:ident, $variant:ident, $eval:ident,
     $op_name:literal, $family:ident) => {
        pub fn $name(
            &self,
            lhs: impl Into<SymbolicValue>,
            rhs: impl Into<SymbolicValue>,
        ) -> Result<SymbolicValue, Error> {
            self.binary_op(
                lhs.into(),
                rhs.into(),
                $op_name,
                OpFamily::$family,
                PrimValue::$eval,
                |lhs, rhs| ExprKind::$variant { lhs, rhs },
            )
        }
    };
}

impl ExprGraph {
    pub fn new() -> Self {
        Self {
            id: GraphId::next(),
            state: Mutex::new(GraphState::default()),
        }
    }

    pub fn graph_id(&self) -> GraphId {
        self.id
    }

    pub fn num_nodes(&self) -> usize {
        self.state.lock().unwrap().nodes.len()
    }

    /// Snapshot of all nodes, in insertion order.  Since operands
    /// must already exist when a node is interned, this order is also
    /// a dependency order.
    pub fn nodes(&self) -> Vec<(NodeId, Expr)> {
        let state = self.state.lock().unwrap();
        state
            .nodes
            .iter()
            .enumerate()
            .map(|(index, expr)| {
                (NodeId::new(self.id, index), expr.clone())
            })
            .collect()
    }

    /// Look up a single node.  Never fails for a handle minted by
    /// this graph; a handle from any other graph is rejected.
    pub fn node(&self, node_id: NodeId) -> Result<Expr, Error> {
        self.check_handle(node_id)?;
        let state = self.state.lock().unwrap();
        Ok(state.nodes[node_id.index()].clone())
    }

    /// Free variables declared within this graph, in declaration
    /// order.
    pub fn free_var_decls(&self) -> Vec<FreeVarDecl> {
        self.state.lock().unwrap().free_vars.clone()
    }

    pub(crate) fn check_handle(&self, node_id: NodeId) -> Result<(), Error> {
        if node_id.graph_id() != self.id {
            return Err(Error::InvalidGraphHandle {
                expected: self.id,
                found: node_id.graph_id(),
            });
        }
        Ok(())
    }

    /// Content-addressed insertion: returns the handle of an existing
    /// node with a structurally identical descriptor, or creates one.
    /// Under concurrent insertion of the same descriptor exactly one
    /// node is created, and every caller observes its handle.
    pub fn intern(
        &self,
        ty: Kind,
        kind: ExprKind,
    ) -> Result<NodeId, Error> {
        for operand in kind.input_nodes() {
            self.check_handle(operand)?;
        }

        let mut state = self.state.lock().unwrap();
        if let Some(node_id) = state.dedup.get(&kind) {
            return Ok(*node_id);
        }
        let node_id = NodeId::new(self.id, state.nodes.len());
        state.nodes.push(Expr {
            kind: kind.clone(),
            ty,
        });
        state.dedup.insert(kind, node_id);
        Ok(node_id)
    }

    /// Force a value against this graph, returning its node handle.
    /// This is the only point at which a concrete value is
    /// materialized as a (hash-consed) `Const` node.
    pub fn node_id(
        &self,
        value: &SymbolicValue,
    ) -> Result<NodeId, Error> {
        match value {
            SymbolicValue::Const(prim) => {
                self.intern(prim.kind(), ExprKind::Const(*prim))
            }
            SymbolicValue::Node(node_ref) => node_ref.thunk.force(self),
        }
    }

    //////////////////////////////////////////////////
    ////            Value Construction             ///
    //////////////////////////////////////////////////

    /// Declare a named solver input of the given kind.  The name is
    /// claimed immediately; the `FreeVar` node is only inserted once
    /// the value is first used symbolically.
    pub fn free_var(
        &self,
        name: impl Into<String>,
        ty: Kind,
    ) -> Result<SymbolicValue, Error> {
        let name = name.into();
        let starts_with_digit = name
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(true);
        if starts_with_digit {
            return Err(Error::InvalidFreeVariableName(name));
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.free_var_ordinals.contains_key(&name) {
                return Err(Error::DuplicateFreeVariableName(name));
            }
            let ordinal = state.free_vars.len();
            state.free_var_ordinals.insert(name.clone(), ordinal);
            state.free_vars.push(FreeVarDecl {
                name: name.clone(),
                ty: ty.clone(),
            });
        }

        let node_ty = ty.clone();
        let thunk = NodeThunk::new(self.id, move |graph| {
            graph.intern(node_ty, ExprKind::FreeVar { name })
        });
        Ok(SymbolicValue::Node(NodeRef::new(ty, thunk)))
    }

    fn binary_op(
        &self,
        lhs: SymbolicValue,
        rhs: SymbolicValue,
        op_name: &'static str,
        family: OpFamily,
        eval: fn(PrimValue, PrimValue) -> Result<PrimValue, Error>,
        make_expr: fn(NodeId, NodeId) -> ExprKind,
    ) -> Result<SymbolicValue, Error> {
        let result_ty =
            family.result_kind(op_name, &lhs.kind(), &rhs.kind())?;

        // Fast path: all-concrete operands are evaluated eagerly in
        // host arithmetic and never touch the graph.
        if let (Some(lhs), Some(rhs)) =
            (lhs.as_prim_value(), rhs.as_prim_value())
        {
            return Ok(SymbolicValue::Const(eval(lhs, rhs)?));
        }

        let node_ty = result_ty.clone();
        let thunk = NodeThunk::new(self.id, move |graph| {
            let lhs = graph.node_id(&lhs)?;
            let rhs = graph.node_id(&rhs)?;
            graph.intern(node_ty, make_expr(lhs, rhs))
        });
        Ok(SymbolicValue::Node(NodeRef::new(result_ty, thunk)))
    }

    binary_op! {add, Add, eval_add, "add", Arithmetic}
    binary_op! {sub, Sub, eval_sub, "sub", Arithmetic}
    binary_op! {mul, Mul, eval_mul, "mul", Arithmetic}
    binary_op! {div, Div, eval_div, "div", Arithmetic}
    binary_op! {modulo, Mod, eval_mod, "mod", Arithmetic}

    binary_op! {bit_and, BitAnd, eval_bit_and, "bit_and", Bitwise}
    binary_op! {bit_or, BitOr, eval_bit_or, "bit_or", Bitwise}
    binary_op! {bit_xor, BitXor, eval_bit_xor, "bit_xor", Bitwise}

    binary_op! {boolean_and, And, eval_and, "and", Boolean}
    binary_op! {boolean_or, Or, eval_or, "or", Boolean}

    binary_op! {equal, Equal, eval_equal, "equal", Equality}
    binary_op! {
        not_equal, NotEqual, eval_not_equal, "not_equal", Equality
    }
    binary_op! {
        less_than, LessThan, eval_less_than, "less_than", Ordering
    }
    binary_op! {
        greater_than, GreaterThan, eval_greater_than,
        "greater_than", Ordering
    }
    binary_op! {
        less_than_or_equal, LessThanOrEqual,
        eval_less_than_or_equal, "less_than_or_equal", Ordering
    }
    binary_op! {
        greater_than_or_equal, GreaterThanOrEqual,
        eval_greater_than_or_equal, "greater_than_or_equal", Ordering
    }

    /// Logical negation on `Bool`, bitwise complement on integers.
    pub fn not(
        &self,
        arg: impl Into<SymbolicValue>,
    ) -> Result<SymbolicValue, Error> {
        let arg = arg.into();
        let ty = arg.kind();
        if !ty.is_bool() && !ty.is_integer() {
            return Err(Error::UnsupportedOperandKind {
                op: "not",
                kind: ty,
            });
        }

        if let Some(prim) = arg.as_prim_value() {
            return Ok(SymbolicValue::Const(PrimValue::eval_not(prim)?));
        }

        let node_ty = ty.clone();
        let thunk = NodeThunk::new(self.id, move |graph| {
            let arg = graph.node_id(&arg)?;
            graph.intern(node_ty, ExprKind::Not { arg })
        });
        Ok(SymbolicValue::Node(NodeRef::new(ty, thunk)))
    }

    //////////////////////////////////////////////////
    ////            Symbolic Conditional           ///
    //////////////////////////////////////////////////

    /// The symbolic control-flow primitive.
    ///
    /// A concrete condition evaluates only the live branch producer;
    /// the other is never invoked.  Code that recurses along the
    /// reachable branch relies on this, so the dead branch must not
    /// be forced even speculatively.
    ///
    /// A symbolic condition evaluates both producers.  The branch
    /// kinds must agree (checked here, before any node exists).
    /// Matching concrete results collapse to that constant with no
    /// multiplexer; otherwise the result is a symbolic value whose
    /// node is a `Select` over the condition and both branches.
    pub fn if_else<ThenFunc, ElseFunc>(
        &self,
        condition: impl Into<SymbolicValue>,
        then_branch: ThenFunc,
        else_branch: ElseFunc,
    ) -> Result<SymbolicValue, Error>
    where
        ThenFunc: FnOnce() -> Result<SymbolicValue, Error>,
        ElseFunc: FnOnce() -> Result<SymbolicValue, Error>,
    {
        let condition = condition.into();
        let cond_ty = condition.kind();
        if !cond_ty.is_bool() {
            return Err(Error::ConditionMustBeBoolean(cond_ty));
        }

        let condition = match condition {
            SymbolicValue::Const(prim) => {
                // Kind was checked above, so this is a Bool.
                return if prim.as_bool() == Some(true) {
                    then_branch()
                } else {
                    else_branch()
                };
            }
            SymbolicValue::Node(node_ref) => node_ref,
        };

        let if_true = then_branch()?;
        let if_false = else_branch()?;

        let true_ty = if_true.kind();
        let false_ty = if_false.kind();
        if true_ty != false_ty {
            return Err(Error::BranchKindMismatch {
                if_branch: true_ty,
                else_branch: false_ty,
            });
        }

        // A symbolic condition selecting between equal concrete
        // results is that result.
        if let (Some(lhs), Some(rhs)) =
            (if_true.as_prim_value(), if_false.as_prim_value())
        {
            if lhs == rhs {
                return Ok(SymbolicValue::Const(lhs));
            }
        }

        let node_ty = true_ty.clone();
        let thunk = NodeThunk::new(self.id, move |graph| {
            let condition = condition.thunk.force(graph)?;
            let if_true = graph.node_id(&if_true)?;
            let if_false = graph.node_id(&if_false)?;
            if if_true == if_false {
                // Selecting the same node on both sides is the
                // identity.
                return Ok(if_true);
            }
            graph.intern(
                node_ty,
                ExprKind::Select {
                    condition,
                    if_true,
                    if_false,
                },
            )
        });
        Ok(SymbolicValue::Node(NodeRef::new(true_ty, thunk)))
    }

    //////////////////////////////////////////////////
    ////              Sum Operations               ///
    //////////////////////////////////////////////////

    /// Inject a value as the left alternative of
    /// `Sum<value_kind, right_ty>`.
    pub fn construct_left(
        &self,
        value: impl Into<SymbolicValue>,
        right_ty: Kind,
    ) -> SymbolicValue {
        self.construct_sum(SumSide::Left, value.into(), right_ty)
    }

    /// Inject a value as the right alternative of
    /// `Sum<left_ty, value_kind>`.
    pub fn construct_right(
        &self,
        value: impl Into<SymbolicValue>,
        left_ty: Kind,
    ) -> SymbolicValue {
        self.construct_sum(SumSide::Right, value.into(), left_ty)
    }

    fn construct_sum(
        &self,
        side: SumSide,
        value: SymbolicValue,
        other_ty: Kind,
    ) -> SymbolicValue {
        let sum_ty = match side {
            SumSide::Left => Kind::sum(value.kind(), other_ty),
            SumSide::Right => Kind::sum(other_ty, value.kind()),
        };

        let node_ty = sum_ty.clone();
        let thunk = NodeThunk::new(self.id, move |graph| {
            let value = graph.node_id(&value)?;
            graph.intern(node_ty, ExprKind::SumConstruct { side, value })
        });
        SymbolicValue::Node(NodeRef::new(sum_ty, thunk))
    }

    pub fn access_left(
        &self,
        sum: impl Into<SymbolicValue>,
    ) -> Result<SymbolicValue, Error> {
        self.sum_access(SumSide::Left, sum.into())
    }

    pub fn access_right(
        &self,
        sum: impl Into<SymbolicValue>,
    ) -> Result<SymbolicValue, Error> {
        self.sum_access(SumSide::Right, sum.into())
    }

    fn sum_access(
        &self,
        side: SumSide,
        sum: SymbolicValue,
    ) -> Result<SymbolicValue, Error> {
        let sum_ty = sum.kind();
        let Some((left, right)) = sum_ty.as_sum() else {
            return Err(Error::SumOperationRequiresSumKind {
                op: "sum_access",
                kind: sum_ty,
            });
        };
        let result_ty = match side {
            SumSide::Left => left.clone(),
            SumSide::Right => right.clone(),
        };

        let node_ty = result_ty.clone();
        let thunk = NodeThunk::new(self.id, move |graph| {
            let sum = graph.node_id(&sum)?;
            graph.intern(node_ty, ExprKind::SumAccess { side, sum })
        });
        Ok(SymbolicValue::Node(NodeRef::new(result_ty, thunk)))
    }

    pub fn is_left(
        &self,
        sum: impl Into<SymbolicValue>,
    ) -> Result<SymbolicValue, Error> {
        self.sum_is(SumSide::Left, sum.into())
    }

    pub fn is_right(
        &self,
        sum: impl Into<SymbolicValue>,
    ) -> Result<SymbolicValue, Error> {
        self.sum_is(SumSide::Right, sum.into())
    }

    fn sum_is(
        &self,
        side: SumSide,
        sum: SymbolicValue,
    ) -> Result<SymbolicValue, Error> {
        let sum_ty = sum.kind();
        if !sum_ty.is_sum() {
            return Err(Error::SumOperationRequiresSumKind {
                op: "sum_is",
                kind: sum_ty,
            });
        }

        let thunk = NodeThunk::new(self.id, move |graph| {
            let sum = graph.node_id(&sum)?;
            graph.intern(Kind::Bool, ExprKind::SumIs { side, sum })
        });
        Ok(SymbolicValue::Node(NodeRef::new(Kind::Bool, thunk)))
    }
}

impl Default for ExprGraph {
    fn default() -> Self {
        Self::new()
    }
}
