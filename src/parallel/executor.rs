//! Parallel executor for integer batches
//!
//! Uses Rayon for work-stealing parallelism with a pool scoped to each call.

use crate::error::{Error, Result};
use rayon::prelude::*;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

/// Parallel map of a function over a batch of integers
///
/// Every input index is processed exactly once; results come back ordered
/// by input index regardless of which worker finished first. The pool is
/// built per call with `min(max_parallelism, inputs.len())` threads and
/// torn down when the call returns.
///
/// # Arguments
/// * `func` - Function to apply to each input (must be thread-safe)
/// * `inputs` - Batch of integers to process
/// * `config` - Parallel execution configuration
///
/// # Returns
/// * `Ok(Vec<i64>)` - Complete ordered results
/// * `Err(Error::TaskFailed)` - First task failure observed; no partial
///   results are returned and no further task splits are handed out
///
/// # Performance
/// - Sequential: N items × T seconds = N×T total time
/// - Parallel: N items × T seconds / num_cpus ≈ (N×T)/cores total time
pub fn run_parallel<F>(func: &F, inputs: &[i64], config: &ParallelConfig) -> Result<Vec<i64>>
where
    F: Fn(i64) -> Result<i64> + Send + Sync,
{
    // Empty batch fast path
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    // Single item - no parallelism needed
    if inputs.len() == 1 {
        let result = func(inputs[0]).map_err(|e| task_failed(0, inputs[0], e))?;
        return Ok(vec![result]);
    }

    // Never spawn more workers than tasks
    let workers = config.max_parallelism.max(1).min(inputs.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    tracing::debug!(tasks = inputs.len(), workers, "dispatching parallel batch");

    // Indexed collect writes each result into its own slot, so ordering
    // needs no reconciliation afterwards. Collecting into Result
    // short-circuits on the first error: remaining splits are dropped,
    // in-flight tasks finish, nothing partial escapes.
    pool.install(|| {
        inputs
            .par_iter()
            .enumerate()
            .map(|(index, &input)| func(input).map_err(|e| task_failed(index, input, e)))
            .collect::<Result<Vec<i64>>>()
    })
}

fn task_failed(index: usize, input: i64, source: Error) -> Error {
    Error::TaskFailed {
        index,
        input,
        source: Box::new(source),
    }
}
