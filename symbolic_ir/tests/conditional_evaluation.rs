use symbolic_ir::{
    Error, ExprGraph, ExprKind, Kind, PrimValue, SymbolicValue,
};

#[test]
fn concrete_true_never_invokes_else_branch() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let result = graph.if_else(
        true,
        || Ok(SymbolicValue::from(1u32)),
        || panic!("else branch must not be invoked"),
    )?;

    assert_eq!(result.as_prim_value(), Some(PrimValue::U32(1)));
    assert_eq!(graph.num_nodes(), 0);
    Ok(())
}

#[test]
fn concrete_false_never_invokes_then_branch() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let result = graph.if_else(
        false,
        || panic!("then branch must not be invoked"),
        || Ok(SymbolicValue::from(2u32)),
    )?;

    assert_eq!(result.as_prim_value(), Some(PrimValue::U32(2)));
    assert_eq!(graph.num_nodes(), 0);
    Ok(())
}

#[test]
fn matching_concrete_branches_collapse() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let condition = graph.free_var("cond", Kind::Bool)?;

    let result = graph.if_else(
        condition,
        || Ok(SymbolicValue::from(5u32)),
        || Ok(SymbolicValue::from(5u32)),
    )?;

    // No multiplexer, and nothing was forced: the graph stays empty.
    assert_eq!(result.as_prim_value(), Some(PrimValue::U32(5)));
    assert_eq!(graph.num_nodes(), 0);
    Ok(())
}

#[test]
fn symbolic_condition_builds_multiplexer() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let condition = graph.free_var("cond", Kind::Bool)?;

    let result = graph.if_else(
        condition.clone(),
        || Ok(SymbolicValue::from(5u32)),
        || Ok(SymbolicValue::from(7u32)),
    )?;
    assert!(!result.is_concrete());
    assert_eq!(result.kind(), Kind::U32);

    let first = graph.node_id(&result)?;
    let second = graph.node_id(&result)?;
    assert_eq!(first, second);

    let expr = graph.node(first)?;
    assert_eq!(expr.ty, Kind::U32);
    let ExprKind::Select {
        condition: cond_id,
        if_true,
        if_false,
    } = expr.kind.clone()
    else {
        panic!("Expected a select node, but found {}", expr.kind)
    };
    assert_eq!(cond_id, graph.node_id(&condition)?);
    assert_eq!(
        graph.node(if_true)?.kind,
        ExprKind::Const(PrimValue::U32(5)),
    );
    assert_eq!(
        graph.node(if_false)?.kind,
        ExprKind::Const(PrimValue::U32(7)),
    );

    // Condition, both constants, and the select itself.
    assert_eq!(graph.num_nodes(), 4);
    Ok(())
}

#[test]
fn identical_branch_nodes_collapse_to_that_node() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let condition = graph.free_var("cond", Kind::Bool)?;
    let x = graph.free_var("x", Kind::U32)?;

    let result = graph.if_else(
        condition,
        || Ok(x.clone()),
        || Ok(x.clone()),
    )?;

    assert_eq!(graph.node_id(&result)?, graph.node_id(&x)?);
    // Only the condition and x; no select node was created.
    assert_eq!(graph.num_nodes(), 2);
    Ok(())
}

#[test]
fn equivalent_conditionals_share_one_select() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let condition = graph.free_var("cond", Kind::Bool)?;

    let first = graph.if_else(
        condition.clone(),
        || Ok(SymbolicValue::from(5u32)),
        || Ok(SymbolicValue::from(7u32)),
    )?;
    let second = graph.if_else(
        condition,
        || Ok(SymbolicValue::from(5u32)),
        || Ok(SymbolicValue::from(7u32)),
    )?;

    assert_eq!(graph.node_id(&first)?, graph.node_id(&second)?);
    assert_eq!(graph.num_nodes(), 4);
    Ok(())
}

#[test]
fn branch_kind_mismatch_is_rejected_before_insertion() {
    let graph = ExprGraph::new();
    let condition = graph.free_var("cond", Kind::Bool).unwrap();

    let result = graph.if_else(
        condition,
        || Ok(SymbolicValue::from(true)),
        || Ok(SymbolicValue::from(5u32)),
    );

    assert!(matches!(
        result,
        Err(Error::BranchKindMismatch {
            if_branch: Kind::Bool,
            else_branch: Kind::U32,
        })
    ));
    assert_eq!(graph.num_nodes(), 0);
}

#[test]
fn condition_must_be_boolean() {
    let graph = ExprGraph::new();

    let result = graph.if_else(
        5u32,
        || panic!("then branch must not be invoked"),
        || panic!("else branch must not be invoked"),
    );

    assert!(matches!(
        result,
        Err(Error::ConditionMustBeBoolean(Kind::U32))
    ));
    assert_eq!(graph.num_nodes(), 0);
}

#[test]
fn nested_conditionals_compose() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let outer = graph.free_var("outer", Kind::Bool)?;
    let inner = graph.free_var("inner", Kind::Bool)?;

    let result = graph.if_else(
        outer,
        || {
            graph.if_else(
                inner.clone(),
                || Ok(SymbolicValue::from(1u32)),
                || Ok(SymbolicValue::from(2u32)),
            )
        },
        || Ok(SymbolicValue::from(3u32)),
    )?;

    let node_id = graph.node_id(&result)?;
    let expr = graph.node(node_id)?;
    let ExprKind::Select { if_true, .. } = expr.kind.clone() else {
        panic!("Expected a select node, but found {}", expr.kind)
    };
    assert!(matches!(
        graph.node(if_true)?.kind,
        ExprKind::Select { .. }
    ));
    Ok(())
}
