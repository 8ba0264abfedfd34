use anyhow::Result;
use digraph_scc::graph::DiGraph;
use digraph_scc::prelude::*;
use digraph_scc::{clear_error, last_error, Error};

fn graph(num_nodes: usize, arcs: &[(usize, usize)]) -> Result<DiGraph> {
    let mut graph = DiGraph::with_capacity(num_nodes);
    for _ in 0..num_nodes {
        graph.add_vertex()?;
    }
    for &(src, dst) in arcs {
        graph.add_edge(src, dst)?;
    }
    Ok(graph)
}

fn sorted_arcs(graph: &DiGraph) -> Vec<(usize, usize)> {
    let mut arcs = graph.arcs().collect::<Vec<_>>();
    arcs.sort_unstable();
    arcs
}

#[test]
fn test_zero_capacity_gets_a_default() {
    let graph = DiGraph::with_capacity(0);
    assert!(graph.capacity() >= 1);
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_arcs(), 0);
}

#[test]
fn test_growth_past_initial_capacity() -> Result<()> {
    let mut graph = DiGraph::with_capacity(2);
    for expected in 0..100 {
        assert_eq!(graph.add_vertex()?, expected);
    }
    assert_eq!(graph.num_nodes(), 100);
    assert!(graph.capacity() >= 100);
    graph.check_integrity()?;
    Ok(())
}

#[test]
fn test_add_edge_errors() -> Result<()> {
    let mut graph = graph(3, &[(0, 1)])?;

    assert_eq!(graph.add_edge(0, 3), Err(Error::InvalidVertex));
    assert_eq!(graph.add_edge(3, 0), Err(Error::InvalidVertex));
    assert_eq!(graph.add_edge(0, 1), Err(Error::EdgeExists));
    assert_eq!(graph.num_arcs(), 1);

    // Self-loops are legal and count as arcs.
    graph.add_edge(2, 2)?;
    assert!(graph.has_edge(2, 2));
    assert_eq!(graph.num_arcs(), 2);
    Ok(())
}

#[test]
fn test_remove_edge_errors() -> Result<()> {
    let mut graph = graph(3, &[(0, 1), (1, 2)])?;

    assert_eq!(graph.remove_edge(0, 2), Err(Error::EdgeNotFound));
    assert_eq!(graph.remove_edge(5, 0), Err(Error::InvalidVertex));
    assert_eq!(graph.num_arcs(), 2);

    graph.remove_edge(0, 1)?;
    assert_eq!(graph.num_arcs(), 1);
    assert!(!graph.has_edge(0, 1));
    Ok(())
}

#[test]
fn test_has_edge_is_a_query_not_an_error() -> Result<()> {
    let graph = graph(2, &[(0, 1)])?;
    clear_error();
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    // Out-of-range endpoints are a "no", and leave the error slot alone.
    assert!(!graph.has_edge(7, 0));
    assert!(!graph.has_edge(0, 7));
    assert_eq!(last_error(), None);
    Ok(())
}

#[test]
fn test_last_error_slot() -> Result<()> {
    let mut graph = graph(2, &[(0, 1)])?;
    clear_error();
    assert_eq!(graph.add_edge(0, 1), Err(Error::EdgeExists));
    assert_eq!(last_error(), Some(Error::EdgeExists));
    // Success does not clear the slot.
    graph.add_edge(1, 0)?;
    assert_eq!(last_error(), Some(Error::EdgeExists));
    clear_error();
    assert_eq!(last_error(), None);
    Ok(())
}

#[test]
fn test_arc_count_matches_outdegrees() -> Result<()> {
    let mut graph = graph(4, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 0)])?;
    graph.remove_edge(0, 2)?;
    graph.add_edge(2, 0)?;
    let _ = graph.add_edge(2, 0);
    let _ = graph.remove_edge(1, 3);

    let total = (0..graph.num_nodes()).map(|node| graph.outdegree(node)).sum::<usize>();
    assert_eq!(graph.num_arcs(), total);
    graph.check_integrity()?;
    Ok(())
}

#[test]
fn test_transpose_involution() -> Result<()> {
    let graph = graph(5, &[(0, 1), (1, 2), (2, 0), (3, 3), (2, 4), (4, 1)])?;
    let transpose = graph.transpose();
    assert_eq!(transpose.num_nodes(), graph.num_nodes());
    assert_eq!(transpose.num_arcs(), graph.num_arcs());
    assert!(transpose.has_edge(1, 0));
    assert!(transpose.has_edge(3, 3));
    transpose.check_integrity()?;

    let back = transpose.transpose();
    assert_eq!(sorted_arcs(&back), sorted_arcs(&graph));
    Ok(())
}

#[test]
fn test_copy_independence() -> Result<()> {
    let mut graph = graph(3, &[(0, 1), (1, 2)])?;
    let copy = graph.clone();

    graph.add_edge(2, 0)?;
    graph.remove_edge(0, 1)?;

    assert_eq!(copy.num_arcs(), 2);
    assert!(copy.has_edge(0, 1));
    assert!(!copy.has_edge(2, 0));
    copy.check_integrity()?;
    Ok(())
}

#[test]
fn test_resize() -> Result<()> {
    let mut graph = graph(4, &[(0, 1)])?;
    assert_eq!(graph.resize(2), Err(Error::InvalidParameter));
    graph.resize(4)?;
    graph.resize(64)?;
    assert!(graph.capacity() >= 64);
    assert_eq!(graph.num_nodes(), 4);
    assert!(graph.has_edge(0, 1));
    Ok(())
}

#[test]
fn test_from_arcs_matches_explicit_construction() -> Result<()> {
    let arcs = [(0, 1), (1, 2), (2, 0), (2, 2)];
    let built = graph(3, &arcs)?;
    let from_arcs = DiGraph::from_arcs(arcs);
    assert_eq!(sorted_arcs(&from_arcs), sorted_arcs(&built));
    from_arcs.check_integrity()?;
    Ok(())
}
