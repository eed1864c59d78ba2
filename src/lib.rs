//! # parboost - Parallel Batch Execution for Integer Functions
//!
//! [![Crates.io](https://img.shields.io/crates/v/parboost.svg)](https://crates.io/crates/parboost)
//! [![Documentation](https://docs.rs/parboost/badge.svg)](https://docs.rs/parboost)
//! [![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)
//!
//! Give parboost a pure `i64 -> i64` function and a batch of inputs; it runs
//! the function once per input across your CPU cores and hands back the
//! results in input order. If parallel execution fails, it quietly re-runs
//! the batch sequentially so the caller still gets correct results.
//!
//! ## Features
//!
//! - ⚡ **Ordered parallel map** - results indexed by input position, never
//!   by completion order
//! - 🧵 **Call-scoped pools** - `min(cores, batch len)` workers built per
//!   call, no process-wide scheduler state
//! - 🛟 **Sequential fallback** - any executor failure degrades to in-order
//!   sequential execution with a diagnostic log line
//! - 🔒 **Zero unsafe code** - disjoint result slots come from rayon's
//!   indexed collect, not hand-rolled synchronization
//!
//! ## Quick Start
//!
//! Add parboost to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! parboost = "0.1.0"
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use parboost::{apply, Value};
//!
//! # fn main() -> parboost::Result<()> {
//! let square = |n: i64| Ok(n * n);
//!
//! // Batch input runs in parallel, results stay in input order
//! let batch = apply(&square, &Value::ints(vec![1, 2, 3, 4, 5]))?;
//! assert_eq!(batch, Value::ints(vec![1, 4, 9, 16, 25]));
//!
//! // Scalar input runs inline on the calling thread
//! let single = apply(&square, &Value::Int(7))?;
//! assert_eq!(single, Value::Int(49));
//! # Ok(())
//! # }
//! ```
//!
//! ### Reusable Boosted Functions
//!
//! Wrap the function once and call it like the original:
//!
//! ```rust
//! use parboost::{Boosted, ParallelConfig, Value};
//!
//! # fn main() -> parboost::Result<()> {
//! let double = Boosted::with_config(
//!     |n: i64| Ok(n * 2),
//!     ParallelConfig { max_parallelism: 4 },
//! );
//!
//! let result = double.call(&Value::ints(vec![10, 20, 30]))?;
//! assert_eq!(result, Value::ints(vec![20, 40, 60]));
//! # Ok(())
//! # }
//! ```
//!
//! ### Functions That Can Fail
//!
//! User functions return [`Result`]; a failure during parallel execution
//! triggers the sequential retry, and only a failure during that retry
//! reaches the caller:
//!
//! ```rust
//! use parboost::{apply, Error, Value};
//!
//! let checked_half = |n: i64| {
//!     if n % 2 == 0 {
//!         Ok(n / 2)
//!     } else {
//!         Err(Error::function(format!("{} is odd", n)))
//!     }
//! };
//!
//! // Deterministic failure: parallel run fails, sequential retry fails on
//! // the same input, so the function's own error surfaces
//! let err = apply(&checked_half, &Value::ints(vec![2, 3, 4])).unwrap_err();
//! assert!(matches!(err, Error::Function(_)));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Value → classify → Scalar ───────────────→ func(n)
//!                  → Batch  → Parallel Executor (rayon pool, ordered collect)
//!                               │ on failure
//!                               └→ warn! diagnostic → sequential re-run
//! ```
//!
//! ### Main Components
//!
//! - [`apply`] / [`apply_with_config`] - dispatch entry points
//! - [`Boosted`] - a function bundled with its dispatch configuration
//! - [`run_parallel`] - the ordered parallel map underneath
//! - [`Value`] - boundary value representation (int, array of ints, or
//!   rejected shapes)
//! - [`Error`] / [`Result`] - structured failures with severity
//!   classification
//!
//! ## Error Handling
//!
//! Anything that is not an int or an array of ints is rejected up front:
//!
//! ```rust
//! use parboost::{apply, Error, Value};
//!
//! let square = |n: i64| Ok(n * n);
//! match apply(&square, &Value::String("x".to_string())) {
//!     Err(Error::InvalidArgument { got }) => assert_eq!(got, "string"),
//!     other => panic!("expected InvalidArgument, got {:?}", other),
//! }
//! ```
//!
//! ## Limitations
//!
//! - Functions must be pure and safe to invoke concurrently; the engine
//!   makes no reentrancy provisions on their behalf
//! - No per-task timeouts: a hung function hangs the call
//! - No partial results: one task failure discards the parallel run
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the parboost engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod parallel;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use parallel::{run_parallel, ParallelConfig};
pub use runtime::{apply, apply_with_config, Boosted, Value};
