use log::{error, info, warn};
use std::collections::HashMap;
use thiserror::Error;

use crate::tracker::project::{Project, ProjectStatus};
use crate::tracker::task::{Task, TaskPriority, TaskStatus, local_timestamp_now};

/// Hard failures on the structural write paths
///
/// Lookup misses on read-only or non-structural paths (status updates,
/// progress queries, export) are reported as `false`/`None` instead; that
/// asymmetry is part of the store's contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// A project with this name already exists
    #[error("project '{0}' already exists")]
    DuplicateProject(String),
    /// No project with this name is known to the store
    #[error("project '{0}' does not exist")]
    ProjectNotFound(String),
}

/// Owns all projects and their tasks
///
/// No process-wide singleton: callers construct a store explicitly and pass
/// it around. The store is single-threaded by design; wrap it in a mutex if
/// multiple callers need it, because id assignment and the two-collection
/// append in `add_task` are not atomic across threads.
pub struct ProjectStore {
    /// All projects in creation order
    ///
    /// Vec is the primary storage: it keeps insertion order for listings and
    /// exports, and gives a simple ownership model where each project owns
    /// its tasks directly. Name lookups are linear scans, which is fine at
    /// coordination scales (tens of projects).
    pub(crate) projects: Vec<Project>,

    /// Flat index of task id to owning project name
    ///
    /// Tasks live inside their project's Vec; this map is the store-wide
    /// index for O(1) id lookup on status updates. It is kept in sync with
    /// the project task lists by `add_task` (tasks are never deleted or
    /// moved, so insertion is the only sync point).
    task_index: HashMap<u64, String>,

    /// Counter for generating unique task ids; never reset or reused
    task_counter: u64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            task_index: HashMap::new(),
            task_counter: 0,
        }
    }
}

impl ProjectStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new project
    ///
    /// The new project starts with status `planned`, empty task, resource,
    /// milestone, and risk lists, and a creation timestamp.
    ///
    /// # Errors
    /// `TrackerError::DuplicateProject` if a project with this name exists.
    pub fn create_project(
        &mut self,
        name: &str,
        description: &str,
        objectives: Vec<String>,
        timeline: &str,
        created_by: &str,
    ) -> Result<&Project, TrackerError> {
        if self.get_project(name).is_some() {
            error!("project '{}' already exists", name);
            return Err(TrackerError::DuplicateProject(name.to_string()));
        }

        let project = Project {
            name: name.to_string(),
            description: description.to_string(),
            objectives,
            timeline: timeline.to_string(),
            status: ProjectStatus::planned,
            created_by: created_by.to_string(),
            created_at: local_timestamp_now(),
            tasks: Vec::new(),
            resources: Vec::new(),
            milestones: Vec::new(),
            risks: Vec::new(),
        };

        self.projects.push(project);
        info!("project '{}' created by '{}'", name, created_by);
        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Add a task to a project
    ///
    /// Assigns the next store-wide task id (strictly increasing over the
    /// store's lifetime), sets status `assigned`, and appends the task to
    /// the project's task list and the flat index, in that order.
    ///
    /// # Errors
    /// `TrackerError::ProjectNotFound` if the project does not exist. No
    /// existing project is mutated on the error path.
    pub fn add_task(
        &mut self,
        project_name: &str,
        task_name: &str,
        assignee: &str,
        deadline: &str,
        description: &str,
        priority: TaskPriority,
    ) -> Result<&Task, TrackerError> {
        let Some(pos) = self.projects.iter().position(|p| p.name == project_name) else {
            error!("project '{}' does not exist", project_name);
            return Err(TrackerError::ProjectNotFound(project_name.to_string()));
        };

        self.task_counter += 1;
        let task = Task {
            id: self.task_counter,
            name: task_name.to_string(),
            description: description.to_string(),
            assignee: assignee.to_string(),
            deadline: deadline.to_string(),
            priority,
            status: TaskStatus::assigned,
            dependencies: Vec::new(),
            created_at: local_timestamp_now(),
            updated_at: None,
            notes: None,
        };
        let task_id = task.id;

        let project = &mut self.projects[pos];
        project.tasks.push(task);
        self.task_index.insert(task_id, project_name.to_string());

        info!(
            "task '{}' (#{}) added to project '{}' and assigned to '{}'",
            task_name, task_id, project_name, assignee
        );
        let tasks = &self.projects[pos].tasks;
        Ok(&tasks[tasks.len() - 1])
    }

    /// Update the status of a task by id
    ///
    /// On a match, overwrites the status, sets `updated_at`, and replaces
    /// the notes. Returns false for an unknown id; this is a soft failure
    /// (logged, no error) because it changes no structural invariant.
    pub fn update_task_status(&mut self, task_id: u64, new_status: TaskStatus, notes: &str) -> bool {
        let Some(project_name) = self.task_index.get(&task_id).cloned() else {
            warn!("task with id {} was not found", task_id);
            return false;
        };

        // Index and task lists are kept in sync, so the owning project and
        // the task itself are both present here.
        let task = self
            .projects
            .iter_mut()
            .find(|p| p.name == project_name)
            .and_then(|p| p.tasks.iter_mut().find(|t| t.id == task_id));

        match task {
            Some(task) => {
                let old_status = task.status;
                task.status = new_status;
                task.updated_at = Some(local_timestamp_now());
                task.notes = Some(notes.to_string());
                info!(
                    "task {}: '{}' -> '{}' ({})",
                    task_id, old_status, new_status, notes
                );
                true
            }
            None => {
                warn!("task with id {} was not found", task_id);
                false
            }
        }
    }

    /// Get a project by name
    pub fn get_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Names of all projects in creation order
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    /// Number of projects in the store
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Total number of tasks across all projects
    pub fn task_count(&self) -> usize {
        self.task_index.len()
    }
}
