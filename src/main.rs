//! Project Tracker - Demo Entry Point
//!
//! Runs a short walk-through against an in-memory store: create a project,
//! assign tasks, complete one, and print progress, statistics, and the
//! report. The store lives only for the duration of the run; use `--export`
//! to keep the project as a JSON file.

use anyhow::Result;
use clap::Parser;
use project_tracker::{ProjectStore, TaskPriority, TaskStatus, logging};
use std::path::PathBuf;

/// Project Tracker - in-memory project and task tracking walk-through
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Export the demo project to this JSON file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write audit logs to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = logging::init_logging(args.log_dir.as_deref())?;

    let mut store = ProjectStore::new();

    store.create_project(
        "Weather Station IoT",
        "Measure and visualize environmental data",
        vec![
            "Collect data from the temperature sensor".to_string(),
            "Display the data visually".to_string(),
            "Analyze trends".to_string(),
        ],
        "4 weeks",
        "teacher",
    )?;

    let sensor_task = store
        .add_task(
            "Weather Station IoT",
            "Connect the temperature sensor",
            "Jan Novak",
            "2025-09-20",
            "Wire the BME280 sensor to the board",
            TaskPriority::high,
        )?
        .id;

    store.add_task(
        "Weather Station IoT",
        "Implement the web interface",
        "Marie Svobodova",
        "2025-09-27",
        "Build a web UI for displaying the data",
        TaskPriority::high,
    )?;

    store.update_task_status(
        sensor_task,
        TaskStatus::completed,
        "sensor verified on the bench",
    );

    if let Some(progress) = store.track_progress("Weather Station IoT") {
        println!("Project progress: {progress}%");
    }

    let report = store.generate_report("Weather Station IoT")?;
    println!("\nReport for project '{}':", report.project_name);
    println!("Status: {}", report.status);
    println!("Progress: {}%", report.progress);
    println!(
        "Completed tasks: {}/{}",
        report.completed_tasks_count, report.total_tasks
    );
    for pending in &report.pending_tasks {
        println!(
            "Pending: {} ({}, due {}, priority {})",
            pending.name, pending.assignee, pending.deadline, pending.priority
        );
    }

    if let Some(stats) = store.project_stats("Weather Station IoT") {
        println!(
            "\nTasks by priority: critical={} high={} normal={} low={}",
            stats.by_priority.critical,
            stats.by_priority.high,
            stats.by_priority.normal,
            stats.by_priority.low
        );
    }

    if let Some(path) = args.export {
        if store.export_project("Weather Station IoT", &path) {
            println!("\nProject exported to {}", path.display());
        } else {
            eprintln!("\nExport to {} failed, see the log", path.display());
            std::process::exit(1);
        }
    }

    Ok(())
}
