//! Dispatch layer: input classification, execution path choice, fallback
//!
//! The dispatcher looks at the shape of the input exactly once, then either
//! runs the function inline (scalar), hands the batch to the parallel
//! executor, or rejects the input. If the executor fails, the whole batch is
//! re-run sequentially on the calling thread.

use crate::error::{Error, Result};
use crate::parallel::{run_parallel, ParallelConfig};
use crate::runtime::Value;

/// Input shape resolved at the dispatch boundary
#[derive(Debug)]
enum InputShape {
    Scalar(i64),
    Batch(Vec<i64>),
}

/// Classify a boundary value as scalar or batch
///
/// An array qualifies as a batch only if every element is an int; a single
/// stray element rejects the whole input, before any work is dispatched.
fn classify(input: &Value) -> Result<InputShape> {
    match input {
        Value::Int(n) => Ok(InputShape::Scalar(*n)),
        Value::Array(items) => {
            let mut batch = Vec::with_capacity(items.len());
            for item in items.iter() {
                match item {
                    Value::Int(n) => batch.push(*n),
                    other => {
                        return Err(Error::InvalidArgument {
                            got: format!("array containing {}", other.type_name()),
                        })
                    }
                }
            }
            Ok(InputShape::Batch(batch))
        }
        other => Err(Error::InvalidArgument {
            got: other.type_name(),
        }),
    }
}

/// Apply a function to a scalar or batch input
///
/// - `Value::Int` runs the function on the calling thread; its own errors
///   propagate untouched.
/// - `Value::Array` of ints runs on the parallel executor; if that fails
///   for any reason, a diagnostic is logged and the batch is re-executed
///   sequentially. A failure during the sequential retry propagates - it
///   means the error is intrinsic to the function, not to parallelism.
/// - Anything else fails with [`Error::InvalidArgument`].
///
/// # Example
/// ```
/// use parboost::{apply, Value};
///
/// let square = |n: i64| Ok(n * n);
/// let result = apply(&square, &Value::ints(vec![1, 2, 3])).unwrap();
/// assert_eq!(result, Value::ints(vec![1, 4, 9]));
/// ```
pub fn apply<F>(func: &F, input: &Value) -> Result<Value>
where
    F: Fn(i64) -> Result<i64> + Send + Sync,
{
    apply_with_config(func, input, &ParallelConfig::default())
}

/// Apply with an explicit parallelism configuration
pub fn apply_with_config<F>(func: &F, input: &Value, config: &ParallelConfig) -> Result<Value>
where
    F: Fn(i64) -> Result<i64> + Send + Sync,
{
    match classify(input)? {
        InputShape::Scalar(n) => Ok(Value::Int(func(n)?)),
        InputShape::Batch(batch) => match run_parallel(func, &batch, config) {
            Ok(results) => Ok(Value::ints(results)),
            Err(err) => {
                tracing::warn!(
                    severity = ?err.classify(),
                    error = %err,
                    "parallel execution failed, falling back to sequential"
                );
                let mut results = Vec::with_capacity(batch.len());
                for &n in &batch {
                    results.push(func(n)?);
                }
                Ok(Value::ints(results))
            }
        },
    }
}

/// A function wrapped together with its dispatch configuration
///
/// Build the boosted function once, call it many times - scalar or batch,
/// same surface as [`apply`].
///
/// # Example
/// ```
/// use parboost::{Boosted, Value};
///
/// let square = Boosted::new(|n: i64| Ok(n * n));
/// assert_eq!(square.call(&Value::Int(7)).unwrap(), Value::Int(49));
/// ```
pub struct Boosted<F> {
    func: F,
    config: ParallelConfig,
}

impl<F> Boosted<F>
where
    F: Fn(i64) -> Result<i64> + Send + Sync,
{
    /// Wrap a function with the default configuration
    pub fn new(func: F) -> Self {
        Self {
            func,
            config: ParallelConfig::default(),
        }
    }

    /// Wrap a function with an explicit configuration
    pub fn with_config(func: F, config: ParallelConfig) -> Self {
        Self { func, config }
    }

    /// Dispatch an input through the wrapped function
    pub fn call(&self, input: &Value) -> Result<Value> {
        apply_with_config(&self.func, input, &self.config)
    }
}
