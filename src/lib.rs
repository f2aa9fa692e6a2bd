//! Project Tracker Library
//!
//! An in-memory project and task tracking engine. A coordinator defines
//! projects, assigns tasks against them, tracks status changes, and derives
//! progress metrics, statistics, reports, and JSON exports.
//!
//! # Architecture
//!
//! The library follows a small layered design:
//! - **Domain Layer**: `tracker` module - `Project`/`Task` entities and the
//!   `ProjectStore` that owns them and enforces uniqueness invariants
//! - **Derived Views**: `progress` and `report` modules - read-only
//!   aggregations computed on demand
//! - **Export Layer**: `export` module - the only component that performs
//!   external I/O
//!
//! The store is single-threaded by design: no operation suspends or spawns
//! work, and callers that need concurrent access wrap the whole store in
//! their own lock.
//!
//! Two error shapes coexist by design. Structural write paths (duplicate
//! project creation, adding a task to or reporting on an unknown project)
//! fail hard with [`TrackerError`]; lookup misses elsewhere (status update
//! by unknown id, progress/stats/export on an unknown name) come back as
//! `false`/`None` with an audit log entry.
//!
//! # Example
//!
//! ```
//! use project_tracker::{ProjectStore, TaskPriority, TaskStatus};
//!
//! let mut store = ProjectStore::new();
//! store.create_project(
//!     "Weather Station",
//!     "Collect and visualize sensor data",
//!     vec!["Read the sensor".to_string()],
//!     "4 weeks",
//!     "teacher",
//! )?;
//! let task = store.add_task(
//!     "Weather Station",
//!     "Wire the sensor",
//!     "Jan",
//!     "2025-09-20",
//!     "",
//!     TaskPriority::high,
//! )?;
//! let id = task.id;
//! store.update_task_status(id, TaskStatus::completed, "done ahead of time");
//! assert_eq!(store.track_progress("Weather Station"), Some(100.0));
//! # Ok::<(), project_tracker::TrackerError>(())
//! ```

mod export;
pub mod logging;
mod progress;
mod report;
mod tracker;

// Re-export commonly used types
pub use progress::{PriorityBreakdown, ProjectStats, project_stats, track_progress};
pub use report::{Report, TaskSummary, build_report};
pub use tracker::{
    Project, ProjectStatus, ProjectStore, Task, TaskPriority, TaskStatus, TrackerError,
    local_timestamp_now,
};
