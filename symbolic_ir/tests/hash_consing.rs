use symbolic_ir::{Error, ExprGraph, ExprKind, Kind, PrimValue};

#[test]
fn intern_is_idempotent() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let first =
        graph.intern(Kind::U32, ExprKind::Const(PrimValue::U32(5)))?;
    let second =
        graph.intern(Kind::U32, ExprKind::Const(PrimValue::U32(5)))?;

    assert_eq!(first, second);
    assert_eq!(graph.num_nodes(), 1);
    Ok(())
}

#[test]
fn distinct_descriptors_make_distinct_nodes() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let five = graph.intern(Kind::U32, ExprKind::Const(PrimValue::U32(5)))?;
    let seven =
        graph.intern(Kind::U32, ExprKind::Const(PrimValue::U32(7)))?;

    assert_ne!(five, seven);
    assert_eq!(graph.num_nodes(), 2);
    Ok(())
}

#[test]
fn operand_order_is_part_of_the_key() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let a = graph.intern(Kind::U32, ExprKind::Const(PrimValue::U32(1)))?;
    let b = graph.intern(Kind::U32, ExprKind::Const(PrimValue::U32(2)))?;

    let ab = graph.intern(Kind::U32, ExprKind::Add { lhs: a, rhs: b })?;
    let ba = graph.intern(Kind::U32, ExprKind::Add { lhs: b, rhs: a })?;

    // Commutative operations are not normalized.
    assert_ne!(ab, ba);
    Ok(())
}

#[test]
fn repeated_insertion_count_is_bounded() -> Result<(), Error> {
    let graph = ExprGraph::new();

    let a = graph.intern(Kind::U64, ExprKind::Const(PrimValue::U64(1)))?;
    let b = graph.intern(Kind::U64, ExprKind::Const(PrimValue::U64(2)))?;

    let mut node_ids = Vec::new();
    for _ in 0..100 {
        node_ids
            .push(graph.intern(Kind::U64, ExprKind::Add { lhs: a, rhs: b })?);
    }

    assert!(node_ids.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(graph.num_nodes(), 3);
    Ok(())
}

#[test]
fn equivalent_values_share_one_node() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let x = graph.free_var("x", Kind::U64)?;

    // Two textual occurrences of the same subexpression, built
    // through independent values.
    let first = graph.add(x.clone(), 5u64)?;
    let second = graph.add(x, 5u64)?;

    let first_id = graph.node_id(&first)?;
    let second_id = graph.node_id(&second)?;

    assert_eq!(first_id, second_id);
    assert_eq!(graph.num_nodes(), 3); // x, const 5, add
    Ok(())
}

#[test]
fn graph_size_tracks_distinct_subexpressions() -> Result<(), Error> {
    let graph = ExprGraph::new();
    let mut value = graph.free_var("x", Kind::U64)?;

    // Each level doubles the naive expression tree; sharing keeps
    // the graph linear in the number of levels.
    for _ in 0..10 {
        value = graph.add(value.clone(), value)?;
    }
    graph.node_id(&value)?;

    assert_eq!(graph.num_nodes(), 11);
    Ok(())
}

#[test]
fn lookup_with_foreign_handle_is_rejected() -> Result<(), Error> {
    let graph_a = ExprGraph::new();
    let graph_b = ExprGraph::new();

    let node_id =
        graph_a.intern(Kind::U32, ExprKind::Const(PrimValue::U32(5)))?;

    assert!(graph_a.node(node_id).is_ok());
    assert!(matches!(
        graph_b.node(node_id),
        Err(Error::InvalidGraphHandle { .. })
    ));
    Ok(())
}

#[test]
fn insertion_with_foreign_operand_is_rejected() -> Result<(), Error> {
    let graph_a = ExprGraph::new();
    let graph_b = ExprGraph::new();

    let foreign =
        graph_a.intern(Kind::U32, ExprKind::Const(PrimValue::U32(5)))?;

    assert!(matches!(
        graph_b.intern(Kind::U32, ExprKind::Not { arg: foreign }),
        Err(Error::InvalidGraphHandle { .. })
    ));
    assert_eq!(graph_b.num_nodes(), 0);
    Ok(())
}
