//! Report generation
//!
//! A report is a derived, read-only snapshot of one project: its progress,
//! task partitions, and copied metadata. Building a report never mutates the
//! project or its tasks.

use chrono::NaiveDateTime;
use log::{error, info};
use serde::Serialize;

use crate::progress::track_progress;
use crate::tracker::{
    Project, ProjectStatus, ProjectStore, TaskPriority, TaskStatus, TrackerError,
    local_timestamp_now,
};

/// Summary of a not-yet-completed task as it appears in a report
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub name: String,
    pub assignee: String,
    pub deadline: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

/// A point-in-time snapshot of a project's state
///
/// Tasks are partitioned into completed (names only) and pending (full
/// summaries); insertion order is preserved within each partition, and every
/// task appears in exactly one of the two.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub project_name: String,
    pub status: ProjectStatus,
    pub progress: f64,
    pub total_tasks: usize,
    pub completed_tasks_count: usize,
    pub completed_tasks: Vec<String>,
    pub pending_tasks_count: usize,
    pub pending_tasks: Vec<TaskSummary>,
    pub risks: Vec<serde_json::Value>,
    pub objectives: Vec<String>,
    pub generated_at: NaiveDateTime,
}

/// Build a report from a project snapshot
pub fn build_report(project: &Project) -> Report {
    let completed_tasks: Vec<String> = project
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::completed)
        .map(|t| t.name.clone())
        .collect();

    let pending_tasks: Vec<TaskSummary> = project
        .tasks
        .iter()
        .filter(|t| t.status != TaskStatus::completed)
        .map(|t| TaskSummary {
            name: t.name.clone(),
            assignee: t.assignee.clone(),
            deadline: t.deadline.clone(),
            priority: t.priority,
            status: t.status,
        })
        .collect();

    Report {
        project_name: project.name.clone(),
        status: project.status,
        progress: track_progress(project),
        total_tasks: project.tasks.len(),
        completed_tasks_count: completed_tasks.len(),
        completed_tasks,
        pending_tasks_count: pending_tasks.len(),
        pending_tasks,
        risks: project.risks.clone(),
        objectives: project.objectives.clone(),
        generated_at: local_timestamp_now(),
    }
}

impl ProjectStore {
    /// Generate a detailed report for a project, by name
    ///
    /// # Errors
    /// `TrackerError::ProjectNotFound` if the project is unknown to the
    /// store. Unlike the progress queries, an unknown name here is a hard
    /// failure the caller must handle.
    pub fn generate_report(&self, project_name: &str) -> Result<Report, TrackerError> {
        let Some(project) = self.get_project(project_name) else {
            error!("project '{}' does not exist", project_name);
            return Err(TrackerError::ProjectNotFound(project_name.to_string()));
        };

        let report = build_report(project);
        info!("report generated for project '{}'", project_name);
        Ok(report)
    }
}
