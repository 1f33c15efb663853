#![forbid(unsafe_code)]

mod error;
mod grid;
mod percolation;
mod stats;
pub mod union_find;

pub use error::{Error, Result};
pub use percolation::Percolation;
pub use stats::{estimate_percolation_probability, PercolationStats, CONFIDENCE_95};
