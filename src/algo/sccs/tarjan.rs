use super::Sccs;
use crate::algo::visits::{depth_first::*, Sequential};
use crate::error::Error;
use crate::graph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;
use sux::traits::BitFieldSliceMut;
use unwrap_infallible::UnwrapInfallible;

/// Computes the strongly connected components of a graph using Tarjan's
/// algorithm.
///
/// Components are emitted in reverse topological order of the
/// [condensation](super::condensation): the first component is a sink.
/// Within a component, nodes appear in the order in which they are popped
/// off the component stack.
///
/// The depth-first visit is iterative, with its frame stack on the heap, so
/// arbitrarily long visit paths cannot overflow the execution stack.
///
/// Returns [`Error::GraphEmpty`] on a graph with no nodes.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn tarjan(graph: &impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Result<Sccs, Error> {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return Err(Error::GraphEmpty.record());
    }

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components");

    let mut visit = SeqPred::new(graph);
    // usize::MAX marks nodes whose index has not been assigned yet; the
    // index counter cannot reach it, as every node is numbered once.
    let mut index = vec![usize::MAX; num_nodes];
    let mut lowlink = vec![0; num_nodes];
    let mut on_stack = BitVec::new(num_nodes);
    // The component stack. Every node is pushed exactly once, so the
    // initial capacity is never exceeded.
    let mut stack = Vec::with_capacity(num_nodes);
    let mut next_index = 0;
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut component = vec![0; num_nodes];

    visit
        .visit_all(
            |event| {
                match event {
                    EventPred::Previsit { curr, .. } => {
                        index[curr] = next_index;
                        lowlink[curr] = next_index;
                        next_index += 1;
                        stack.push(curr);
                        on_stack.set(curr, true);
                    }
                    EventPred::Revisit { curr, pred, .. } => {
                        // Arc into the component being built: only nodes on
                        // the component stack can lower the predecessor's
                        // lowlink; arcs into completed components are
                        // ignored.
                        if on_stack[curr] && index[curr] < lowlink[pred] {
                            lowlink[pred] = index[curr];
                        }
                    }
                    EventPred::Postvisit { curr, pred, .. } => {
                        if lowlink[curr] == index[curr] {
                            // curr is the root of a new component, made of
                            // everything above it on the component stack.
                            let id = components.len();
                            let mut nodes = Vec::new();
                            while let Some(node) = stack.pop() {
                                on_stack.set(node, false);
                                component[node] = id;
                                nodes.push(node);
                                if node == curr {
                                    break;
                                }
                            }
                            components.push(nodes);
                        } else if lowlink[curr] < lowlink[pred] {
                            // Propagate knowledge to the parent
                            lowlink[pred] = lowlink[curr];
                        }
                    }
                    _ => (),
                }
                Ok(())
            },
            pl,
        )
        .unwrap_infallible();

    pl.done();
    Ok(Sccs::new(components, component))
}
