//! Timing helpers for measuring operation duration
//!
//! The original decorator-style timer is expressed as explicit higher-order
//! functions: callers pass the operation in rather than annotating it.

use std::time::{Duration, Instant};

/// Run an operation and return its result together with the elapsed time
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Run an operation, logging its elapsed time at info level
///
/// # Arguments
///
/// * `name` - A descriptive name for the operation (for log context)
/// * `f` - The operation to run
pub fn timed<T, F>(name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let (result, elapsed) = measure(f);
    tracing::info!(
        operation = %name,
        elapsed_ms = elapsed.as_millis() as u64,
        "operation completed"
    );
    result
}
