use anyhow::Result;
use digraph_scc::algo::sccs;
use digraph_scc::graph::DiGraph;
use digraph_scc::io;
use digraph_scc::prelude::*;
use dsi_progress_logger::prelude::*;

#[test]
fn test_load_and_analyze_edge_list() -> Result<()> {
    let input = "\
# three components: {0, 1}, {2, 3, 4}, {5}
0 1
1 0
2 3
3 4
4 2
1 2
4 5
";
    let graph = io::read_edge_list(input.as_bytes())?;
    graph.check_integrity()?;
    assert_eq!(graph.num_nodes(), 6);
    assert_eq!(graph.num_arcs(), 7);

    let sccs = sccs::find(&graph, no_logging![])?;
    assert_eq!(sccs.num_components(), 3);
    Ok(())
}

#[test]
fn test_formats_describe_the_same_graph() -> Result<()> {
    let graph = DiGraph::from_arcs([(0, 1), (1, 2), (2, 0), (2, 3), (4, 0)]);

    let mut edge_list = Vec::new();
    io::write_edge_list(&graph, &mut edge_list)?;
    let mut adjacency = Vec::new();
    io::write_adjacency_list(&graph, &mut adjacency)?;

    let from_edge_list = io::read_edge_list(edge_list.as_slice())?;
    let from_adjacency = io::read_adjacency_list(adjacency.as_slice())?;

    assert_eq!(from_edge_list.num_nodes(), graph.num_nodes());
    assert_eq!(from_adjacency.num_nodes(), graph.num_nodes());
    assert_eq!(
        from_edge_list.arcs().collect::<Vec<_>>(),
        from_adjacency.arcs().collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_dot_output_of_condensation() -> Result<()> {
    let graph = DiGraph::from_arcs([(0, 1), (1, 0), (1, 2)]);
    let sccs = sccs::find(&graph, no_logging![])?;
    let condensed = sccs::condensation(&graph, &sccs)?;

    let mut output = Vec::new();
    io::write_dot(&condensed, &mut output)?;
    let text = String::from_utf8(output)?;

    assert!(text.starts_with("digraph G {"));
    // Two nodes and the single cross arc.
    assert_eq!(text.matches("label=").count(), 2);
    assert_eq!(text.matches("->").count(), 1);
    Ok(())
}
