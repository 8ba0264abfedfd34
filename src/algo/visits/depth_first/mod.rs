//! Depth-first visits.
//!
//! Implementations accept a callback with argument [`EventPred`] (or
//! [`EventNoPred`] for visits that do not keep track of parent nodes). The
//! callback is invoked at the [start of a visit](EventPred::Init), [every
//! time a new node is discovered](EventPred::Previsit), [every time a node
//! is revisited](EventPred::Revisit), and, if supported, [every time the
//! enumeration of the successors of a node is
//! completed](EventPred::Postvisit).
//!
//! Since events carry the predecessor of the visited node, all post-init
//! events can be interpreted as arc events; the only exceptions are the
//! previsit and postvisit events of a root, whose predecessor is the root
//! itself.

mod seq;
pub use seq::*;

use super::Event;

/// Types of callback events generated during a depth-first visit not
/// keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// The visit of a new tree is starting: this event is passed before the
    /// previsit of the root, and should be used to set up state.
    Init {
        /// The root of the visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing
    /// a new tree arc, unless all fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit path from the root to the current node.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc,
    /// a forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit path from the root to the current node.
        depth: usize,
    },
    /// The visit tree rooted at `root` is complete.
    Done {
        /// The root of the visit tree.
        root: usize,
    },
}

/// Filter arguments for depth-first visits not keeping track of parent
/// nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The current node.
    pub curr: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth of the visit path from the root to the current node.
    pub depth: usize,
}

impl Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}

/// Types of callback events generated during a depth-first visit keeping
/// track of parent nodes (and possibly of the visit path).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// The visit of a new tree is starting: this event is passed before the
    /// previsit of the root, and should be used to set up state.
    Init {
        /// The root of the visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing
    /// a new tree arc, unless all node fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of the current node in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit path from the root to the current node.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc,
    /// a forward arc, or a cross arc.
    ///
    /// If supported by the visit, `on_stack` denotes whether the node is
    /// currently on the visit path, that is, whether we are traversing a
    /// back arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node whose successor enumeration produced this event.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit path from the root to the current node.
        depth: usize,
        /// Whether the current node is on the visit path. Visits that do
        /// not track the visit path always pass false.
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all node fields are equal to
    /// the root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of the current node in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit path from the root to the current node.
        depth: usize,
    },
    /// The visit tree rooted at `root` is complete.
    Done {
        /// The root of the visit tree.
        root: usize,
    },
}

/// Filter arguments for depth-first visits keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub curr: usize,
    /// The parent of the current node in the visit tree.
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth of the visit path from the root to the current node.
    pub depth: usize,
}

impl Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
