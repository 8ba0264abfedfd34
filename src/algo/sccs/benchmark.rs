use super::{kosaraju, tarjan};
use crate::algo::visits::{depth_first::*, Sequential};
use crate::error::Error;
use crate::graph::traits::RandomAccessGraph;
use dsi_progress_logger::{no_logging, ProgressLog};
use std::mem::size_of;
use std::time::Instant;
use unwrap_infallible::UnwrapInfallible;

/// The outcome of running both SCC engines on the same graph.
///
/// This record is observational: timings come from wall-clock measurement,
/// memory figures are coarse estimates of each engine's working state, and
/// [`results_match`](BenchmarkResult::results_match) compares the two
/// partitions through [`Sccs::same_partition`](super::Sccs::same_partition).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    /// Wall-clock time of the Tarjan engine, in milliseconds.
    pub tarjan_time_ms: f64,
    /// Wall-clock time of the Kosaraju engine, in milliseconds.
    pub kosaraju_time_ms: f64,
    /// Estimated peak working-state bytes of the Tarjan engine.
    pub tarjan_memory_peak_bytes: usize,
    /// Estimated peak working-state bytes of the Kosaraju engine.
    pub kosaraju_memory_peak_bytes: usize,
    /// The maximum number of nodes simultaneously on a visit path during a
    /// depth-first visit of the graph.
    pub tarjan_stack_max_depth: usize,
    /// The number of arcs of the transpose built by the Kosaraju engine.
    pub kosaraju_transpose_arcs: usize,
    /// Whether the two engines grouped the nodes identically.
    pub results_match: bool,
}

/// Runs both engines on `graph` and reports their timings, estimated
/// memory use, and whether their results agree.
///
/// The engines themselves run unlogged so that the timings are not skewed;
/// `pl` only receives phase information. Returns [`Error::GraphEmpty`] on a
/// graph with no nodes.
pub fn benchmark(
    graph: &impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Result<BenchmarkResult, Error> {
    let num_nodes = graph.num_nodes();
    let num_arcs = graph.num_arcs();
    let usize_bytes = size_of::<usize>();

    pl.info(format_args!(
        "Benchmarking SCC engines on {} nodes, {} arcs",
        num_nodes, num_arcs
    ));

    let start = Instant::now();
    let tarjan_result = tarjan(graph, no_logging![])?;
    let tarjan_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let kosaraju_result = kosaraju(graph, no_logging![])?;
    let kosaraju_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    // Coarse estimates of each engine's working state: exact accounting
    // would require instrumenting the allocator.
    // Tarjan: index, lowlink, component map and component stack, plus the
    // on-stack bitmap and the component lists.
    let tarjan_memory_peak_bytes =
        num_nodes * 5 * usize_bytes + num_nodes.div_ceil(8);
    // Kosaraju: finish order, component map and component lists, two
    // visited bitmaps, plus the transpose.
    let kosaraju_memory_peak_bytes = num_nodes * 3 * usize_bytes
        + num_nodes.div_ceil(8) * 2
        + num_nodes * size_of::<Vec<usize>>()
        + num_arcs * usize_bytes;

    // The deepest visit path, measured on an uninstrumented visit in the
    // same order the Tarjan engine uses.
    let mut tarjan_stack_max_depth = 0;
    let mut visit = SeqPred::new(graph);
    visit
        .visit_all(
            |event| {
                if let EventPred::Previsit { depth, .. } = event {
                    tarjan_stack_max_depth = tarjan_stack_max_depth.max(depth + 1);
                }
                Ok(())
            },
            no_logging![],
        )
        .unwrap_infallible();

    let results_match = tarjan_result.same_partition(&kosaraju_result);
    pl.info(format_args!(
        "Tarjan: {:.3} ms, Kosaraju: {:.3} ms, results match: {}",
        tarjan_time_ms, kosaraju_time_ms, results_match
    ));

    Ok(BenchmarkResult {
        tarjan_time_ms,
        kosaraju_time_ms,
        tarjan_memory_peak_bytes,
        kosaraju_memory_peak_bytes,
        tarjan_stack_max_depth,
        kosaraju_transpose_arcs: num_arcs,
        results_match,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn test_benchmark_agrees_with_engines() -> Result<(), Error> {
        let graph = DiGraph::from_arcs([(0, 1), (1, 2), (2, 0), (2, 3), (4, 3)]);
        let record = benchmark(&graph, no_logging![])?;
        assert!(record.results_match);
        assert_eq!(record.kosaraju_transpose_arcs, 5);
        // The triangle 0 → 1 → 2 forces a visit path of at least three
        // nodes.
        assert!(record.tarjan_stack_max_depth >= 3);
        assert!(record.tarjan_time_ms >= 0.0);
        assert!(record.kosaraju_time_ms >= 0.0);
        Ok(())
    }

    #[test]
    fn test_benchmark_empty_graph() {
        let graph = DiGraph::new();
        assert_eq!(
            benchmark(&graph, no_logging![]).unwrap_err(),
            Error::GraphEmpty
        );
    }
}
