// View filtering for the task collection

use crate::error::Error;
use crate::task::Task;
use std::str::FromStr;

/// Which subset of tasks is visible
///
/// Session/view state only: never persisted, and any value is reachable from
/// any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Whether a task is visible under this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(Error::UnknownFilter(s.to_string())),
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFilter::All => write!(f, "all"),
            TaskFilter::Active => write!(f, "active"),
            TaskFilter::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(completed: bool) -> Task {
        Task {
            id: 1,
            text: "x".to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(TaskFilter::All.matches(&task(false)));
        assert!(TaskFilter::All.matches(&task(true)));
    }

    #[test]
    fn test_active_matches_uncompleted_only() {
        assert!(TaskFilter::Active.matches(&task(false)));
        assert!(!TaskFilter::Active.matches(&task(true)));
    }

    #[test]
    fn test_completed_matches_completed_only() {
        assert!(!TaskFilter::Completed.matches(&task(false)));
        assert!(TaskFilter::Completed.matches(&task(true)));
    }

    #[test]
    fn test_from_str_accepts_known_names() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!("active".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
        assert_eq!("completed".parse::<TaskFilter>().unwrap(), TaskFilter::Completed);
        // Case-insensitive
        assert_eq!("Active".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        let err = "done".parse::<TaskFilter>().unwrap_err();
        assert!(matches!(err, Error::UnknownFilter(ref s) if s == "done"));
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }

    #[test]
    fn test_display() {
        assert_eq!(TaskFilter::All.to_string(), "all");
        assert_eq!(TaskFilter::Active.to_string(), "active");
        assert_eq!(TaskFilter::Completed.to_string(), "completed");
    }
}
