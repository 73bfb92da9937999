//! Executor implementations for laying out a deck's cards.
//!
//! ## Available Executors
//!
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: Sequential execution (re-exported from dobble-traits)
//!
//! ## Usage
//!
//! ```ignore
//! use dobble_executor::{ExecutorImpl, RayonExecutor};
//! use dobble_traits::Executor;
//!
//! let executor = ExecutorImpl::Rayon(RayonExecutor::new());
//! let layouts = executor.execute_all(cards, |card| pack(card));
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use dobble_traits::{Executor, SyncExecutor};

/// A type-erased executor over the concrete implementations.
///
/// The `Executor` trait has generic methods and cannot be used as
/// `dyn Executor`, so the pipeline holds this enum instead.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// One card after another
    Sync(SyncExecutor),

    /// Rayon work-stealing thread pool
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Picks the parallel executor when asked for and compiled in.
    ///
    /// Falls back to sequential execution (with a warning) when `parallel`
    /// is requested but the `rayon` feature is disabled.
    pub fn for_parallelism(parallel: bool) -> Self {
        if !parallel {
            return ExecutorImpl::Sync(SyncExecutor::new());
        }
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            log::warn!("Parallel layout requested but the rayon feature is disabled; running sequentially");
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    /// Sequential: deck generation is small enough that threads are opt-in.
    fn default() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}
