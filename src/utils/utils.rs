use std::time::Instant;
use tracing::debug;

// Run an operation and log how long it took
pub fn measure_time<F, T>(operation_name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    debug!(
        "{} completed in {:.2?}",
        operation_name,
        elapsed
    );

    result
}
