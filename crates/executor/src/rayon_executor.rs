//! Rayon-based parallel executor.
//!
//! Cards are CPU-bound and independent, so they map well onto rayon's
//! work-stealing pool.

use dobble_traits::Executor;
use rayon::prelude::*;

/// A parallel executor using rayon's global thread pool.
///
/// `Vec` parallel iterators are indexed, so results are collected in input
/// order even though items finish in any order.
///
/// To limit the number of threads, configure the global pool before the
/// first executor is created:
///
/// ```ignore
/// rayon::ThreadPoolBuilder::new()
///     .num_threads(4)
///     .build_global()?;
///
/// let executor = RayonExecutor::new();
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Cached size of rayon's global pool, reported by `parallelism()`.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_rayon_executor_keeps_input_order() {
        let executor = RayonExecutor::new();
        let items: Vec<u64> = (0..200).collect();
        let results = executor.execute_all(items, |x| {
            // uneven work so completion order differs from input order
            std::thread::sleep(std::time::Duration::from_micros((200 - x) * 5));
            x * 2
        });
        let expected: Vec<u64> = (0..200).map(|x| x * 2).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_rayon_executor_fallible_results_stay_in_place() {
        let executor = RayonExecutor::new();
        let results: Vec<Result<i32, &str>> =
            executor.execute_all_fallible(vec![1, 2, 0, 4], |x| {
                if x == 0 { Err("empty card") } else { Ok(10 / x) }
            });

        assert_eq!(results, vec![Ok(10), Ok(5), Err("empty card"), Ok(2)]);
    }

    #[test]
    fn test_rayon_executor_parallelism_is_positive() {
        let executor = RayonExecutor::new();
        assert!(executor.parallelism() > 0);
        assert_eq!(executor.name(), "RayonExecutor");
    }

    #[test]
    fn test_rayon_executor_visits_every_item_once() {
        let executor = RayonExecutor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let items: Vec<usize> = (0..100).collect();

        let _ = executor.execute_all(items, {
            let counter = counter.clone();
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }
}
