//! Parallel execution support for parboost
//!
//! Provides the ordered parallel map that batch dispatch runs on.

mod executor;

pub use executor::{run_parallel, ParallelConfig};
