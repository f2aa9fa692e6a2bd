//! Progress and statistics calculations
//!
//! Pure functions over a project's task list, plus by-name wrappers on
//! `ProjectStore` that report an unknown project as `None` (soft failure).

use log::{error, info};
use serde::Serialize;

use crate::tracker::{Project, ProjectStore, TaskPriority, TaskStatus};

/// Task counts per priority level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub normal: usize,
    pub low: usize,
}

/// Per-status and per-priority task counts for a single project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total_tasks: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub assigned: usize,
    pub by_priority: PriorityBreakdown,
}

/// Completion percentage of a project
///
/// `100 * completed / total`, rounded to one decimal place. A project with
/// no tasks yields exactly `0.0` rather than a division error.
pub fn track_progress(project: &Project) -> f64 {
    if project.tasks.is_empty() {
        return 0.0;
    }

    let completed = project
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::completed)
        .count();
    let progress = (completed as f64 / project.tasks.len() as f64) * 100.0;
    (progress * 10.0).round() / 10.0
}

/// Per-status counts and priority breakdown for a project
pub fn project_stats(project: &Project) -> ProjectStats {
    let mut stats = ProjectStats {
        total_tasks: project.tasks.len(),
        ..Default::default()
    };

    for task in &project.tasks {
        match task.status {
            TaskStatus::completed => stats.completed += 1,
            TaskStatus::in_progress => stats.in_progress += 1,
            TaskStatus::blocked => stats.blocked += 1,
            TaskStatus::assigned => stats.assigned += 1,
        }
        match task.priority {
            TaskPriority::critical => stats.by_priority.critical += 1,
            TaskPriority::high => stats.by_priority.high += 1,
            TaskPriority::normal => stats.by_priority.normal += 1,
            TaskPriority::low => stats.by_priority.low += 1,
        }
    }

    stats
}

impl ProjectStore {
    /// Completion percentage of a project, by name
    ///
    /// Returns `None` for an unknown project (soft failure, logged).
    pub fn track_progress(&self, project_name: &str) -> Option<f64> {
        let Some(project) = self.get_project(project_name) else {
            error!("project '{}' does not exist", project_name);
            return None;
        };

        let progress = track_progress(project);
        let completed = project
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::completed)
            .count();
        info!(
            "project '{}': {:.1}% done ({}/{} tasks)",
            project_name,
            progress,
            completed,
            project.tasks.len()
        );
        Some(progress)
    }

    /// Statistics for a project, by name
    ///
    /// Returns `None` for an unknown project (soft failure, logged).
    pub fn project_stats(&self, project_name: &str) -> Option<ProjectStats> {
        let Some(project) = self.get_project(project_name) else {
            error!("project '{}' does not exist", project_name);
            return None;
        };
        Some(project_stats(project))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ProjectStore {
        let mut store = ProjectStore::new();
        store
            .create_project("p", "", Vec::new(), "", "teacher")
            .unwrap();
        store
    }

    #[test]
    fn test_progress_zero_tasks_is_zero() {
        let store = sample_store();
        assert_eq!(store.track_progress("p"), Some(0.0));
    }

    #[test]
    fn test_progress_one_of_three_rounds_to_one_decimal() {
        let mut store = sample_store();
        for name in ["a", "b", "c"] {
            store
                .add_task("p", name, "jan", "2025-09-20", "", TaskPriority::normal)
                .unwrap();
        }
        assert!(store.update_task_status(1, TaskStatus::completed, ""));

        assert_eq!(store.track_progress("p"), Some(33.3));
    }

    #[test]
    fn test_progress_all_completed_is_hundred() {
        let mut store = sample_store();
        for name in ["a", "b"] {
            store
                .add_task("p", name, "jan", "2025-09-20", "", TaskPriority::normal)
                .unwrap();
        }
        store.update_task_status(1, TaskStatus::completed, "");
        store.update_task_status(2, TaskStatus::completed, "");

        assert_eq!(store.track_progress("p"), Some(100.0));
    }

    #[test]
    fn test_progress_unknown_project_is_none() {
        let store = sample_store();
        assert_eq!(store.track_progress("missing"), None);
    }

    #[test]
    fn test_stats_counts_statuses_and_priorities() {
        let mut store = sample_store();
        store
            .add_task("p", "a", "jan", "2025-09-20", "", TaskPriority::critical)
            .unwrap();
        store
            .add_task("p", "b", "marie", "2025-09-21", "", TaskPriority::normal)
            .unwrap();
        store.update_task_status(1, TaskStatus::blocked, "waiting on parts");

        let stats = store.project_stats("p").unwrap();
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.assigned, 1);
        assert_eq!(stats.by_priority.critical, 1);
        assert_eq!(stats.by_priority.high, 0);
        assert_eq!(stats.by_priority.normal, 1);
        assert_eq!(stats.by_priority.low, 0);
    }

    #[test]
    fn test_stats_unknown_project_is_none() {
        let store = sample_store();
        assert!(store.project_stats("missing").is_none());
    }
}
