use parboost::{Boosted, Error, ParallelConfig, Value};

fn main() -> parboost::Result<()> {
    println!("=== parboost - Boosted Functions ===\n");

    // Wrap once, call like the original function
    let cube = Boosted::new(|n: i64| Ok(n * n * n));

    println!("cube(4) = {}", cube.call(&Value::Int(4))?);
    println!("cube([1..6]) = {}", cube.call(&Value::ints((1..6).collect()))?);

    // Cap the worker count explicitly
    let capped = Boosted::with_config(
        |n: i64| Ok(n + 1),
        ParallelConfig { max_parallelism: 2 },
    );
    println!(
        "increment with 2 workers = {}",
        capped.call(&Value::ints(vec![10, 20, 30, 40]))?
    );

    // Invalid shapes are rejected before any work is dispatched
    match cube.call(&Value::String("x".to_string())) {
        Err(Error::InvalidArgument { got }) => {
            println!("rejected input of type: {}", got);
        }
        other => println!("unexpected: {:?}", other),
    }

    Ok(())
}
