use parboost::{apply, Value};
use std::time::Instant;

fn square(n: i64) -> parboost::Result<i64> {
    Ok(n * n)
}

fn is_prime(n: i64) -> parboost::Result<i64> {
    if n < 2 {
        return Ok(0);
    }
    if n == 2 {
        return Ok(1);
    }
    if n % 2 == 0 {
        return Ok(0);
    }
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return Ok(0);
        }
        i += 2;
    }
    Ok(1)
}

fn fib(n: i64) -> parboost::Result<i64> {
    if n <= 1 {
        return Ok(n);
    }
    Ok(fib(n - 1)? + fib(n - 2)?)
}

fn main() -> parboost::Result<()> {
    println!("=== parboost - Complete Demo ===\n");

    println!("Example 1: Square calculation");
    let results = apply(&square, &Value::ints(vec![1, 2, 3, 4, 5]))?;
    println!("square([1, 2, 3, 4, 5]) = {}\n", results);

    println!("Example 2: Single value");
    let single = apply(&square, &Value::Int(7))?;
    println!("square(7) = {}\n", single);

    println!("Example 3: Prime checking");
    let nums = vec![97, 100, 101, 103, 104, 105, 107];
    let results = apply(&is_prime, &Value::ints(nums.clone()))?;
    let prime_count: i64 = results
        .as_array()?
        .iter()
        .map(|v| v.as_int())
        .sum::<parboost::Result<i64>>()?;
    println!("is_prime({:?}) = {}", nums, results);
    println!("{} of {} are prime\n", prime_count, nums.len());

    println!("Example 4: Fibonacci (CPU-intensive)");
    println!("Running fib(30) on 8 parallel inputs...");
    let start = Instant::now();
    let results = apply(&fib, &Value::ints(vec![30; 8]))?;
    let elapsed = start.elapsed();
    println!("Results: {}", results);
    println!("Time: {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
