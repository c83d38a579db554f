// Task collection owner: mutations, derived views, write-through persistence

use crate::error::{Error, Result};
use crate::filter::TaskFilter;
use crate::snapshot;
use crate::storage::{STORAGE_KEY, Storage};
use crate::task::Task;
use crate::ui::Confirm;
use chrono::Utc;
use tracing::{debug, warn};

/// Sole owner of the task collection and its derived views
///
/// All mutations flow through this type. After every mutating operation the
/// full snapshot is rewritten to the injected storage backend, so storage and
/// memory agree by the time the call returns. The presentation layer pulls
/// `visible_tasks()` and `stats()` after each call; nothing is pushed.
pub struct TaskStore<S> {
    storage: S,
    tasks: Vec<Task>,
    filter: TaskFilter,
    last_id: i64,
}

/// Counts over the whole collection, independent of the active filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl<S: Storage> TaskStore<S> {
    /// Load the persisted snapshot, or start empty
    ///
    /// A missing snapshot starts an empty list. A snapshot that exists but
    /// does not decode as a task list is treated as empty rather than fatal;
    /// the same goes for a backend that cannot be read at all.
    pub fn open(storage: S) -> Self {
        let tasks = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(error = %e, "Snapshot unreadable, starting with an empty task list");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Storage read failed, starting with an empty task list");
                Vec::new()
            }
        };

        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        debug!(count = tasks.len(), "Task list loaded");

        Self {
            storage,
            tasks,
            filter: TaskFilter::All,
            last_id,
        }
    }

    /// Add a task from raw user input
    ///
    /// The text is trimmed; empty or all-whitespace input is rejected without
    /// touching the collection. The new task lands at the front of the list.
    pub fn add_task(&mut self, raw_text: &str) -> Result<Task> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let task = Task {
            id: self.next_id(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        };

        self.tasks.insert(0, task.clone());
        self.persist()?;
        debug!(id = task.id, "Task added");
        Ok(task)
    }

    /// Flip completion on the matching task
    ///
    /// An absent id is tolerated silently: the task may have been deleted
    /// between the caller reading the list and acting on it.
    pub fn toggle_task(&mut self, id: i64) -> Result<()> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()
            }
            None => {
                debug!(id, "Toggle for unknown task id ignored");
                Ok(())
            }
        }
    }

    /// Remove the matching task; an absent id is tolerated silently
    pub fn delete_task(&mut self, id: i64) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(id, "Delete for unknown task id ignored");
            return Ok(());
        }
        self.persist()
    }

    /// Remove every completed task, gated on the confirmation collaborator
    ///
    /// Returns the number of removed tasks. With nothing completed the
    /// collaborator is never consulted and nothing is written; a declined
    /// confirmation leaves the collection untouched.
    pub fn clear_completed(&mut self, confirm: &mut dyn Confirm) -> Result<usize> {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        if completed == 0 {
            return Ok(0);
        }

        if !confirm.confirm("Are you sure you want to delete all completed tasks?") {
            debug!("Clearing completed tasks declined");
            return Ok(0);
        }

        self.tasks.retain(|t| !t.completed);
        self.persist()?;
        debug!(removed = completed, "Completed tasks cleared");
        Ok(completed)
    }

    /// Set the active view filter
    ///
    /// Session state only: not persisted, so every new session starts at All.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// The active view filter
    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks visible under the active filter, newest first
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// Counts over the entire collection, regardless of the active filter
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// The full collection, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a reference to the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // Clock-derived but clamped to strictly increasing, so two adds within
    // the same millisecond cannot collide.
    fn next_id(&mut self) -> i64 {
        let id = now_ms().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Overwrite the persisted snapshot with the current collection
    ///
    /// A failed write is surfaced to the caller; the in-memory mutation that
    /// triggered it is not rolled back.
    fn persist(&mut self) -> Result<()> {
        let encoded = snapshot::encode(&self.tasks)?;
        self.storage
            .write(STORAGE_KEY, &encoded)
            .map_err(Error::SnapshotWrite)
    }
}

/// Current wall-clock time in milliseconds since the epoch
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}
