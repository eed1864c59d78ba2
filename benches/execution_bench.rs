use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parboost::{run_parallel, ParallelConfig};

fn fib(n: i64) -> parboost::Result<i64> {
    if n <= 1 {
        return Ok(n);
    }
    Ok(fib(n - 1)? + fib(n - 2)?)
}

fn batch_benchmark(c: &mut Criterion) {
    let inputs = vec![22i64; 8];

    c.bench_function("fib batch parallel", |b| {
        b.iter(|| {
            run_parallel(&fib, black_box(&inputs), &ParallelConfig::default()).unwrap()
        })
    });

    c.bench_function("fib batch sequential", |b| {
        b.iter(|| {
            black_box(&inputs)
                .iter()
                .map(|&n| fib(n).unwrap())
                .collect::<Vec<i64>>()
        })
    });

    c.bench_function("fib batch single worker", |b| {
        b.iter(|| {
            run_parallel(
                &fib,
                black_box(&inputs),
                &ParallelConfig { max_parallelism: 1 },
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, batch_benchmark);
criterion_main!(benches);
