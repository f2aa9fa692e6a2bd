//! Project export
//!
//! The only component in the core that performs external I/O: a full project
//! entity is serialized as pretty-printed JSON to a caller-specified path.
//! The file carries the project attributes with nested tasks in insertion
//! order and no version field; readers must tolerate additive new fields.

use anyhow::Result;
use log::{error, info};
use std::fs;
use std::path::Path;

use crate::tracker::{Project, ProjectStore};

fn write_project(project: &Project, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(project)?;
    fs::write(path, content)?;
    Ok(())
}

impl ProjectStore {
    /// Export a project to a JSON file
    ///
    /// Returns true on success. An unknown project name or any I/O failure
    /// (missing directory, permissions) is reported as false with a log
    /// entry; no error escapes this boundary.
    pub fn export_project(&self, project_name: &str, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let Some(project) = self.get_project(project_name) else {
            error!("project '{}' does not exist", project_name);
            return false;
        };

        match write_project(project, path) {
            Ok(()) => {
                info!(
                    "project '{}' exported to '{}'",
                    project_name,
                    path.display()
                );
                true
            }
            Err(e) => {
                error!("failed to export project '{}': {}", project_name, e);
                false
            }
        }
    }
}
