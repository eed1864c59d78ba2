//! Property-based tests for the parallel executor and dispatcher
//!
//! These tests use proptest to generate random batches and verify that:
//! 1. Parallel results are ordered by input index, never by completion order
//! 2. Repeated runs of a pure function are identical
//! 3. The parallel path agrees with plain sequential application
//! 4. Scalar dispatch is exactly the function itself

use parboost::{apply, run_parallel, ParallelConfig, Value};
use proptest::prelude::*;

fn affine(n: i64) -> parboost::Result<i64> {
    Ok(n.wrapping_mul(3).wrapping_sub(1))
}

proptest! {
    #[test]
    fn prop_order_preserved(inputs in prop::collection::vec(-10_000i64..10_000, 0..64)) {
        let results = run_parallel(&affine, &inputs, &ParallelConfig::default()).unwrap();

        prop_assert_eq!(results.len(), inputs.len());
        for (i, &x) in inputs.iter().enumerate() {
            prop_assert_eq!(results[i], affine(x).unwrap());
        }
    }

    #[test]
    fn prop_idempotent(inputs in prop::collection::vec(any::<i32>().prop_map(i64::from), 0..48)) {
        let first = run_parallel(&affine, &inputs, &ParallelConfig::default()).unwrap();
        let second = run_parallel(&affine, &inputs, &ParallelConfig::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_matches_sequential(inputs in prop::collection::vec(-1_000i64..1_000, 0..48)) {
        let parallel = run_parallel(&affine, &inputs, &ParallelConfig::default()).unwrap();
        let sequential: Vec<i64> = inputs.iter().map(|&n| affine(n).unwrap()).collect();
        prop_assert_eq!(parallel, sequential);
    }

    #[test]
    fn prop_worker_cap_does_not_change_results(
        inputs in prop::collection::vec(-1_000i64..1_000, 1..32),
        cap in 1usize..16,
    ) {
        let capped = run_parallel(&affine, &inputs, &ParallelConfig { max_parallelism: cap })
            .unwrap();
        let default = run_parallel(&affine, &inputs, &ParallelConfig::default()).unwrap();
        prop_assert_eq!(capped, default);
    }

    #[test]
    fn prop_scalar_dispatch_is_the_function(n in any::<i32>().prop_map(i64::from)) {
        let dispatched = apply(&affine, &Value::Int(n)).unwrap();
        prop_assert_eq!(dispatched, Value::Int(affine(n).unwrap()));
    }

    #[test]
    fn prop_batch_dispatch_is_elementwise(inputs in prop::collection::vec(-500i64..500, 0..32)) {
        let dispatched = apply(&affine, &Value::ints(inputs.clone())).unwrap();
        let expected: Vec<i64> = inputs.iter().map(|&n| affine(n).unwrap()).collect();
        prop_assert_eq!(dispatched, Value::ints(expected));
    }
}
