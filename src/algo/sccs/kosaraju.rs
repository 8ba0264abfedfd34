use super::Sccs;
use crate::algo::top_sort;
use crate::algo::visits::{depth_first::*, Sequential};
use crate::error::Error;
use crate::graph::traits::RandomAccessGraph;
use crate::graph::transposed;
use dsi_progress_logger::ProgressLog;
use unwrap_infallible::UnwrapInfallible;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// Pass one computes the finish order of a depth-first visit of the graph
/// (see [`top_sort`]); the engine then builds the transpose, owns it for
/// the duration of the run, and pass two visits the transpose from each
/// node in finish order, last finished first: every visit tree is one
/// component. The first component emitted contains the last-finished node,
/// a source of the [condensation](super::condensation); nodes within a
/// component appear in discovery order of pass two.
///
/// Both passes are iterative, so arbitrarily long visit paths cannot
/// overflow the execution stack.
///
/// Returns [`Error::GraphEmpty`] on a graph with no nodes.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn kosaraju(graph: &impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Result<Sccs, Error> {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return Err(Error::GraphEmpty.record());
    }

    let finish_order = top_sort(graph, pl);
    let transpose = transposed(graph);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components");

    let mut visit = SeqNoPred::new(&transpose);
    // Wraps to zero on the first Init event.
    let mut number_of_components = usize::MAX;
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut component = vec![0; num_nodes];

    for &node in finish_order.iter() {
        visit
            .visit(
                node,
                |event| {
                    match event {
                        EventNoPred::Init { .. } => {
                            number_of_components = number_of_components.wrapping_add(1);
                            components.push(Vec::new());
                        }
                        EventNoPred::Previsit { curr, .. } => {
                            component[curr] = number_of_components;
                            components[number_of_components].push(curr);
                        }
                        _ => (),
                    }
                    Ok(())
                },
                pl,
            )
            .unwrap_infallible();
    }

    pl.done();
    Ok(Sccs::new(components, component))
}
