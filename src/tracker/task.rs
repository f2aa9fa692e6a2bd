use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current timestamp in local timezone
pub fn local_timestamp_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Task status within a project
///
/// Represents the different states a task moves through after assignment.
/// Uses snake_case naming to match the JSON serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Handed to an assignee, not yet started
    assigned,
    /// Actively being worked on
    in_progress,
    /// Finished work
    completed,
    /// Cannot proceed until something external is resolved
    blocked,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(TaskStatus::assigned),
            "in_progress" => Ok(TaskStatus::in_progress),
            "completed" => Ok(TaskStatus::completed),
            "blocked" => Ok(TaskStatus::blocked),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: assigned, in_progress, completed, blocked",
                s
            )),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::assigned => "assigned",
            TaskStatus::in_progress => "in_progress",
            TaskStatus::completed => "completed",
            TaskStatus::blocked => "blocked",
        };
        write!(f, "{}", label)
    }
}

/// Task priority
///
/// Uses snake_case naming to match the JSON serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Can slip without consequence
    low,
    /// Default priority
    normal,
    /// Should be scheduled ahead of normal work
    high,
    /// Blocks the project if not handled
    critical,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::normal
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::low),
            "normal" => Ok(TaskPriority::normal),
            "high" => Ok(TaskPriority::high),
            "critical" => Ok(TaskPriority::critical),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, normal, high, critical",
                s
            )),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskPriority::low => "low",
            TaskPriority::normal => "normal",
            TaskPriority::high => "high",
            TaskPriority::critical => "critical",
        };
        write!(f, "{}", label)
    }
}

/// A single unit of work belonging to exactly one project
///
/// Tasks are created through `ProjectStore::add_task` which assigns the id;
/// after creation the only mutation is a status update (with notes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, monotonically assigned across the whole store
    pub id: u64,
    /// Task name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Person responsible for the task
    pub assignee: String,
    /// Deadline as a YYYY-MM-DD string; carried through, never validated
    pub deadline: String,
    /// Priority (low, normal, high, critical)
    pub priority: TaskPriority,
    /// Current status (assigned, in_progress, completed, blocked)
    pub status: TaskStatus,
    /// Ids of tasks this one depends on; recorded only, never resolved
    #[serde(default)]
    pub dependencies: Vec<u64>,
    /// Timestamp when the task was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last status update, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    /// Notes attached by the last status update, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
