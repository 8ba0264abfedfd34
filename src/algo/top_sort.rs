use crate::algo::visits::{depth_first::*, Sequential};
use crate::graph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::mem::MaybeUninit;
use unwrap_infallible::UnwrapInfallible;

/// Returns the nodes of the graph in topological-sort order, if the graph
/// is acyclic.
///
/// Otherwise, the order reflects the exit times from a depth-first visit of
/// the graph: the first element is the last node to finish, which is why
/// this function doubles as pass one of
/// [Kosaraju's algorithm](crate::algo::sccs::kosaraju).
pub fn top_sort(graph: &impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    let mut visit = SeqPred::new(graph);
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort");

    let mut top_sort = vec![MaybeUninit::uninit(); num_nodes];
    let mut pos = num_nodes;

    visit
        .visit_all(
            |event| {
                if let EventPred::Postvisit { curr, .. } = event {
                    pos -= 1;
                    top_sort[pos].write(curr);
                }

                Ok(())
            },
            pl,
        )
        .unwrap_infallible();

    pl.done();
    // SAFETY: the visit postvisits every node exactly once, so every
    // element of top_sort has been written.
    unsafe { std::mem::transmute::<Vec<MaybeUninit<usize>>, Vec<usize>>(top_sort) }
        .into_boxed_slice()
}
