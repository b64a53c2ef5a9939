use symbolic_ir::{Error, ExprGraph, ExprKind, Kind, SumSide};

#[test]
fn mixed_width_operands_are_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.add(5u32, 5u64),
        Err(Error::KindMismatch {
            lhs: Kind::U32,
            rhs: Kind::U64,
        })
    ));
    assert_eq!(graph.num_nodes(), 0);
}

#[test]
fn mixed_signedness_operands_are_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.add(5u32, 5i32),
        Err(Error::KindMismatch { .. })
    ));
}

#[test]
fn symbolic_operands_are_checked_at_construction() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let x = graph.free_var("x", Kind::U32)?;

    assert!(matches!(
        graph.add(x, true),
        Err(Error::KindMismatch { .. })
    ));

    // The error was raised synchronously; nothing reached the graph.
    assert_eq!(graph.num_nodes(), 0);
    Ok(())
}

#[test]
fn arithmetic_on_booleans_is_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.add(true, false),
        Err(Error::UnsupportedOperandKind {
            op: "add",
            kind: Kind::Bool,
        })
    ));
}

#[test]
fn bitwise_on_floats_is_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.bit_and(1.0f32, 2.0f32),
        Err(Error::UnsupportedOperandKind {
            op: "bit_and",
            kind: Kind::F32,
        })
    ));
}

#[test]
fn boolean_operators_require_bool() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.boolean_and(1u8, 2u8),
        Err(Error::UnsupportedOperandKind { op: "and", .. })
    ));
}

#[test]
fn ordering_on_booleans_is_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.less_than(true, false),
        Err(Error::UnsupportedOperandKind { .. })
    ));
}

#[test]
fn logical_not_on_floats_is_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.not(1.0f64),
        Err(Error::UnsupportedOperandKind {
            op: "not",
            kind: Kind::F64,
        })
    ));
}

#[test]
fn duplicate_free_variable_names_are_rejected() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let _x = graph.free_var("x", Kind::U32)?;

    let duplicate = graph.free_var("x", Kind::U32);
    assert!(matches!(
        duplicate,
        Err(Error::DuplicateFreeVariableName(name)) if name == "x"
    ));

    // The same name in a different graph is fine.
    let other = ExprGraph::new();
    assert!(other.free_var("x", Kind::U32).is_ok());
    Ok(())
}

#[test]
fn invalid_free_variable_names_are_rejected() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.free_var("", Kind::U32),
        Err(Error::InvalidFreeVariableName(_))
    ));
    assert!(matches!(
        graph.free_var("1st", Kind::U32),
        Err(Error::InvalidFreeVariableName(_))
    ));
}

#[test]
fn free_variables_are_declared_in_order() -> Result<(), Error> {
    let graph = ExprGraph::new();
    graph.free_var("first", Kind::Bool)?;
    graph.free_var("second", Kind::U64)?;
    graph.free_var("third", Kind::F32)?;

    let decls = graph.free_var_decls();
    let names: Vec<_> =
        decls.iter().map(|decl| decl.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(decls[1].ty, Kind::U64);
    Ok(())
}

#[test]
fn sum_construction_builds_the_sum_kind() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let left = graph.construct_left(5u32, Kind::Bool);
    assert_eq!(left.kind(), Kind::sum(Kind::U32, Kind::Bool));

    let right = graph.construct_right(true, Kind::U32);
    assert_eq!(right.kind(), Kind::sum(Kind::U32, Kind::Bool));

    // Construction alone inserts nothing.
    assert_eq!(graph.num_nodes(), 0);

    let node_id = graph.node_id(&left)?;
    let expr = graph.node(node_id)?;
    assert!(matches!(
        expr.kind,
        ExprKind::SumConstruct {
            side: SumSide::Left,
            ..
        }
    ));
    Ok(())
}

#[test]
fn sum_access_projects_the_named_side() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let sum = graph.construct_left(5u32, Kind::Bool);

    let left = graph.access_left(sum.clone())?;
    assert_eq!(left.kind(), Kind::U32);

    let right = graph.access_right(sum.clone())?;
    assert_eq!(right.kind(), Kind::Bool);

    let is_left = graph.is_left(sum)?;
    assert_eq!(is_left.kind(), Kind::Bool);
    Ok(())
}

#[test]
fn sum_access_requires_a_sum_kind() {
    let graph = ExprGraph::new();
    assert!(matches!(
        graph.access_left(5u32),
        Err(Error::SumOperationRequiresSumKind {
            kind: Kind::U32,
            ..
        })
    ));
    assert!(matches!(
        graph.is_right(true),
        Err(Error::SumOperationRequiresSumKind { .. })
    ));
}
