//! Visits on graphs.
//!
//! Implementations of [sequential](Sequential) visits depend on a type
//! parameter `A` implementing the trait [`Event`]; they provide visit
//! methods accepting a callback function with argument `A` and returning a
//! `Result<(), E>`, where `E` is a type parameter of the visit method: for
//! example, `E` might be [`StoppedWhenDone`] when completing early,
//! [`Interrupted`] when interrupted or
//! [`Infallible`](std::convert::Infallible) if the visit cannot be
//! interrupted; in the latter case the result can be unwrapped with
//! [`unwrap_infallible`](unwrap_infallible::UnwrapInfallible).
//!
//! If a callback returns an error, the visit is interrupted and the error
//! propagated to the caller of the visit method. Note that an interruption
//! does not necessarily denote an error condition (see, e.g.,
//! [`StoppedWhenDone`]).
//!
//! Additionally, implementations might accept a filter function taking a
//! [`Event::FilterArgs`] that will be called when a new node is discovered.
//! If the filter returns false, the node will be ignored, that is, not even
//! marked as known.
//!
//! All visits accept a mutable reference to an implementation of
//! [`ProgressLog`](dsi_progress_logger::ProgressLog) to log their progress:
//! as usual, when passing
//! [`no_logging![]`](dsi_progress_logger::no_logging) the logging code
//! should be optimized away by the compiler.
//!
//! Visits must provide a `reset` method that makes it possible to reuse
//! them.

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use thiserror::Error;

#[derive(Error, Debug)]
/// The visit was interrupted.
#[error("The visit was interrupted")]
pub struct Interrupted;

#[derive(Error, Debug)]
/// The result of the visit was computed without completing the visit; for
/// example, during an acyclicity test a single arc pointing at the visit
/// path is sufficient to compute the result.
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// Types usable as arguments for the callbacks in visits.
///
/// Arguments are usually enums in which variants represent visit events
/// (previsits, postvisits, etc.). Each variant then contains additional data
/// related to the specific event.
///
/// The associated type [`Event::FilterArgs`] is the type of the arguments
/// passed to the filter associated with the visit. It can be set to `()` if
/// filtering is not supported.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A convenience type alias for the filter arguments of an event.
///
/// It is useful to write match patterns using destructuring syntax.
pub type FilterArgs<A> = <A as Event>::FilterArgs;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit_filtered`](Sequential::visit_filtered) method, which should
/// perform a visit of a graph starting from a given node, and the
/// [`visit_all_filtered`](Sequential::visit_all_filtered) method, which
/// should perform a visit of the whole graph by starting a visit from each
/// node in order.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    /// * `root`: The node to start the visit from.
    /// * `callback`: The callback function.
    /// * `filter`: The filter function.
    /// * `pl`: A progress logger.
    fn visit_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the graph from the specified node without a filter.
    ///
    /// The default implementation calls
    /// [`visit_filtered`](Sequential::visit_filtered) with a filter that
    /// always returns true.
    #[inline(always)]
    fn visit<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit_all_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the whole graph without a filter.
    ///
    /// The default implementation calls
    /// [`visit_all_filtered`](Sequential::visit_all_filtered) with a filter
    /// that always returns true.
    #[inline(always)]
    fn visit_all<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
