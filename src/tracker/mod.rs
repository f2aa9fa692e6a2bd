//! Domain models and the project store
//!
//! This module contains the core tracking data structures and their
//! implementations, split into submodules:
//! - `task`: Task entity with status and priority enums
//! - `project`: Project entity with its status enum
//! - `store`: ProjectStore, the single owner of all projects and tasks

mod project;
mod store;
mod task;

// Re-export all public types
pub use project::{Project, ProjectStatus};
pub use store::{ProjectStore, TrackerError};
pub use task::{Task, TaskPriority, TaskStatus, local_timestamp_now};
