//! # Task Execution
//!
//! Discovery and parse tasks are submitted to an `Executor`, which either
//! runs them immediately on the calling thread or hands them to a rayon
//! thread pool. Both modes return a `TaskHandle` whose result is collected
//! with `wait`.
//!
//! Callers submit every task first and then wait on the handles in
//! submission order. Results are therefore read in a fixed order no matter
//! which worker finishes first, which keeps the pipeline deterministic.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use log::error;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Error, Result};

/// Where submitted tasks run.
#[derive(Clone, Default)]
pub enum Executor {
    /// Run each task synchronously inside `submit`.
    #[default]
    Inline,
    /// Run tasks on a shared worker pool.
    Pool(Arc<ThreadPool>),
}

impl Executor {
    /// Builds a pool executor. `threads == 0` lets rayon pick the size.
    pub fn pool(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("faces-config-{}", index))
            // Dropping the task's sender is enough to fail its handle.
            .panic_handler(|_| error!("Configuration task panicked"))
            .build()
            .map_err(|e| Error::Settings {
                message: format!("Unable to start worker pool: {}", e),
                hint: None,
            })?;
        Ok(Executor::Pool(Arc::new(pool)))
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, Executor::Pool(_))
    }

    /// Submits a unit of work. `label` names the task in errors.
    pub fn submit<T, F>(&self, label: impl Into<String>, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(1);
        match self {
            Executor::Inline => match panic::catch_unwind(AssertUnwindSafe(task)) {
                Ok(result) => {
                    let _ = sender.send(result);
                }
                // Dropping the sender fails the handle, as on the pool.
                Err(_) => error!("Configuration task panicked"),
            },
            Executor::Pool(pool) => {
                pool.spawn(move || {
                    // The receiver may be gone if the caller already failed.
                    let _ = sender.send(task());
                });
            }
        }
        TaskHandle {
            label: label.into(),
            receiver,
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Executor::Inline => f.write_str("Inline"),
            Executor::Pool(pool) => f
                .debug_tuple("Pool")
                .field(&pool.current_num_threads())
                .finish(),
        }
    }
}

/// Pending result of a submitted task.
#[derive(Debug)]
pub struct TaskHandle<T> {
    label: String,
    receiver: Receiver<Result<T>>,
}

impl<T> TaskHandle<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Blocks until the task finishes.
    ///
    /// A task that ends without producing a result (it panicked, inline or
    /// on a worker) is reported as `Error::Interrupted`.
    pub fn wait(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(result) => result,
            Err(_) => Err(Error::Interrupted { task: self.label }),
        }
    }
}
