//! Retry execution engine with fixed-delay policy
//!
//! This module provides a small, synchronous retry execution engine: an
//! operation is invoked up to a fixed number of attempts with a fixed delay
//! between failed attempts, and the final failure is surfaced to the caller
//! unchanged.
//!
//! # Features
//!
//! - Fixed inter-attempt delay, applied only between attempts
//! - Observable retry attempts via the `RetryObserver` trait
//! - Built-in `TracingObserver` for logging and `StatsObserver` for counting
//! - The last error is returned verbatim, never wrapped
//!
//! # Example
//!
//! ```rust
//! use praxis_core::retry::{retry_with_policy, RetryPolicy};
//!
//! let policy = RetryPolicy::default().with_delay(std::time::Duration::ZERO);
//!
//! let result: Result<&str, std::io::Error> = retry_with_policy(&policy, || {
//!     // Your fallible operation here
//!     Ok("success")
//! });
//! assert_eq!(result.unwrap(), "success");
//! ```

mod executor;
mod observer;
mod policy;

pub use executor::{retry_with_policy, RetryExecutor};
pub use observer::{NoOpObserver, RetryObserver, StatsObserver, TracingObserver};
pub use policy::RetryPolicy;
