#![doc = include_str!("../README.md")]

pub mod algo;
pub mod graph;
pub mod io;
pub mod utils;

mod error;
pub use error::{clear_error, last_error, Error};

pub mod prelude {
    pub use crate::algo::traits::*;
    pub use crate::graph::traits::RandomAccessGraph;
    pub use crate::graph::DiGraph;
}
