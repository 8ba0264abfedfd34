//! The mutable directed-graph store and the access trait the algorithms
//! consume.

mod digraph;
pub use digraph::{Arcs, DiGraph};
pub(crate) use digraph::transposed;

pub mod traits;
