/// A graph providing random access to the successors of each node.
///
/// This is the seam between the mutable store and the algorithms: every
/// visit and every engine in [`crate::algo`] is generic over this trait and
/// only ever *reads* through it, which is what makes it sound to run
/// independent computations on the same graph from several threads.
///
/// Nodes are dense indices in `[0, num_nodes)`. Implementations must
/// enumerate successors deterministically: two enumerations of the same
/// node on an unmodified graph yield the same sequence.
pub trait RandomAccessGraph {
    /// The type returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> usize;

    /// Returns the number of successors of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `[0, num_nodes)`.
    fn outdegree(&self, node: usize) -> usize;

    /// Returns the successors of `node` in enumeration order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `[0, num_nodes)`.
    fn successors(&self, node: usize) -> Self::Successors<'_>;
}
