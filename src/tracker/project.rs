use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tracker::task::Task;

/// Project status
///
/// Projects start as `planned`; the status field is informational and no
/// transition rules are enforced. Archival is a status value, not a deletion.
/// Uses snake_case naming to match the JSON serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Defined but not started
    planned,
    /// Work in progress
    active,
    /// All work finished
    completed,
    /// Kept for the record, no longer worked on
    archived,
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ProjectStatus::planned),
            "active" => Ok(ProjectStatus::active),
            "completed" => Ok(ProjectStatus::completed),
            "archived" => Ok(ProjectStatus::archived),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: planned, active, completed, archived",
                s
            )),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::planned => "planned",
            ProjectStatus::active => "active",
            ProjectStatus::completed => "completed",
            ProjectStatus::archived => "archived",
        };
        write!(f, "{}", label)
    }
}

/// A named container of tasks plus descriptive metadata
///
/// The project name is the primary key within a `ProjectStore`. Tasks are
/// owned by the project and kept in insertion order, which equals creation
/// order because tasks are never deleted or moved between projects.
/// Resources, milestones, and risks are opaque entries carried through to
/// reports and exports unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Globally unique project name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Ordered list of objectives
    pub objectives: Vec<String>,
    /// Timeline description (e.g. "4 weeks")
    pub timeline: String,
    /// Current status (planned, active, completed, archived)
    pub status: ProjectStatus,
    /// Who created the project
    pub created_by: String,
    /// Timestamp when the project was created
    pub created_at: NaiveDateTime,
    /// Owned tasks in creation order
    pub tasks: Vec<Task>,
    /// Opaque resource entries
    #[serde(default)]
    pub resources: Vec<serde_json::Value>,
    /// Opaque milestone entries
    #[serde(default)]
    pub milestones: Vec<serde_json::Value>,
    /// Opaque risk entries
    #[serde(default)]
    pub risks: Vec<serde_json::Value>,
}
