use crate::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use crate::graph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;

/// Runs an acyclicity test.
///
/// The test stops as soon as a back arc is found.
pub fn acyclicity(graph: &impl RandomAccessGraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    let mut visit = SeqPath::new(graph);
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity");

    let acyclic = visit.visit_all(
        |event| {
            // Stop the visit as soon as a back arc is found.
            match event {
                EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone {}),
                _ => Ok(()),
            }
        },
        pl,
    );

    pl.done();
    acyclic.is_ok()
}
