// tasklist - Single-user task list with filtering, live counts, and snapshot persistence

pub mod error;
pub mod filter;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod task;
pub mod ui;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use filter::TaskFilter;
pub use storage::{FileStorage, MemoryStorage, STORAGE_KEY, Storage};
pub use store::{Stats, TaskStore, now_ms};
pub use task::Task;
pub use ui::{Confirm, Notify};
