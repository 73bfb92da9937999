//! Executor trait for running independent per-card work.
//!
//! Cards share no mutable state once the design is fixed, so the pipeline can
//! hand the whole deck to an executor. Implementations must return results in
//! input order so that output numbering never depends on scheduling.

use std::fmt::Debug;

/// A strategy for mapping a function over a batch of work items.
///
/// # Implementations
///
/// - `SyncExecutor`: sequential, one card after the other (always available)
/// - `RayonExecutor` (in `dobble-executor`): work-stealing thread pool
pub trait Executor: Send + Sync + Debug {
    /// Apply `f` to every item. Results come back in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Apply a fallible `f` to every item, keeping every outcome.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// Number of items that may be processed at once (1 for sequential executors).
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Processes items strictly one at a time, in order.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_sync_executor_preserves_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec![3, 1, 2], |x| x * 10);
        assert_eq!(results, vec![30, 10, 20]);
    }

    #[test]
    fn test_sync_executor_runs_items_sequentially() {
        let executor = SyncExecutor::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        executor.execute_all(vec![0, 1, 2, 3], move |x| log.lock().unwrap().push(x));
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sync_executor_keeps_failures_in_place() {
        let executor = SyncExecutor::new();
        let results: Vec<Result<u32, String>> =
            executor.execute_all_fallible(vec![1, 0, 4], |x| {
                if x == 0 {
                    Err("empty card".to_string())
                } else {
                    Ok(x)
                }
            });
        assert_eq!(results[0], Ok(1));
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(4));
    }

    #[test]
    fn test_sync_executor_metadata() {
        let executor = SyncExecutor::new();
        assert_eq!(executor.parallelism(), 1);
        assert_eq!(executor.name(), "SyncExecutor");
    }
}
