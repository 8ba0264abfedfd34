//! Error kinds and the per-thread last-error register.

use std::cell::Cell;
use thiserror::Error;

/// The failure kinds reported by this crate.
///
/// Every fallible public operation returns `Result<_, Error>`; in addition,
/// the most recently constructed error is recorded in a thread-local slot
/// readable through [`last_error`] and cleared through [`clear_error`].
/// Successful operations never touch the slot, so callers that want to
/// inspect it after a call must clear it first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A vertex id is outside `[0, num_nodes)`.
    #[error("vertex id out of range")]
    InvalidVertex,
    /// The underlying allocator could not satisfy a request. The operation
    /// that failed has left its receiver unchanged.
    #[error("allocation failed")]
    AllocationFailure,
    /// The operation requires a graph with at least one vertex.
    #[error("graph has no vertices")]
    GraphEmpty,
    /// A parameter is outside its documented domain.
    #[error("parameter outside its documented domain")]
    InvalidParameter,
    /// The directed edge to insert is already present.
    #[error("edge already present")]
    EdgeExists,
    /// The directed edge to remove or look up does not exist.
    #[error("no such edge")]
    EdgeNotFound,
}

thread_local! {
    static LAST_ERROR: Cell<Option<Error>> = const { Cell::new(None) };
}

impl Error {
    /// Records this error in the calling thread's slot and returns it, so
    /// error sites can write `Err(Error::EdgeExists.record())`.
    pub(crate) fn record(self) -> Self {
        LAST_ERROR.with(|slot| slot.set(Some(self)));
        self
    }
}

/// Returns the most recent error recorded on the calling thread, if any.
pub fn last_error() -> Option<Error> {
    LAST_ERROR.with(|slot| slot.get())
}

/// Clears the calling thread's error slot.
pub fn clear_error() {
    LAST_ERROR.with(|slot| slot.set(None));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slot_records_and_clears() {
        clear_error();
        assert_eq!(last_error(), None);

        let err = Error::EdgeNotFound.record();
        assert_eq!(err, Error::EdgeNotFound);
        assert_eq!(last_error(), Some(Error::EdgeNotFound));

        // A later error overwrites the slot.
        Error::InvalidVertex.record();
        assert_eq!(last_error(), Some(Error::InvalidVertex));

        clear_error();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn test_slot_is_per_thread() {
        clear_error();
        Error::GraphEmpty.record();
        let other = std::thread::spawn(last_error).join().unwrap();
        assert_eq!(other, None);
        assert_eq!(last_error(), Some(Error::GraphEmpty));
    }
}
