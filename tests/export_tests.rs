//! Export round-trip tests

use project_tracker::*;
use tempfile::TempDir;

fn demo_store() -> ProjectStore {
    let mut store = ProjectStore::new();
    store
        .create_project(
            "Weather Station IoT",
            "Measure environmental data",
            vec!["Collect sensor data".to_string()],
            "4 weeks",
            "teacher",
        )
        .unwrap();
    store
        .add_task(
            "Weather Station IoT",
            "Connect the sensor",
            "Jan Novak",
            "2025-09-20",
            "Wire the BME280 sensor",
            TaskPriority::high,
        )
        .unwrap();
    store
        .add_task(
            "Weather Station IoT",
            "Implement the web interface",
            "Marie Svobodova",
            "2025-09-27",
            "",
            TaskPriority::normal,
        )
        .unwrap();
    store
}

#[test]
fn test_export_round_trip_reproduces_project() {
    let mut store = demo_store();
    store.update_task_status(1, TaskStatus::completed, "bench verified");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather-station.json");
    assert!(store.export_project("Weather Station IoT", &path));

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: Project = serde_json::from_str(&content).unwrap();

    let original = store.get_project("Weather Station IoT").unwrap();
    assert_eq!(parsed.name, original.name);
    assert_eq!(parsed.description, original.description);
    assert_eq!(parsed.status, original.status);
    assert_eq!(parsed.tasks.len(), original.tasks.len());
    for (parsed_task, original_task) in parsed.tasks.iter().zip(&original.tasks) {
        assert_eq!(parsed_task.id, original_task.id);
        assert_eq!(parsed_task.name, original_task.name);
        assert_eq!(parsed_task.status, original_task.status);
        assert_eq!(parsed_task.priority, original_task.priority);
        assert_eq!(parsed_task.deadline, original_task.deadline);
    }
}

#[test]
fn test_export_is_full_entity_not_report() {
    let store = demo_store();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    assert!(store.export_project("Weather Station IoT", &path));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    // Project attributes with nested tasks, not the derived report shape.
    assert!(value.get("tasks").is_some());
    assert!(value.get("objectives").is_some());
    assert!(value.get("pending_tasks").is_none());
    assert!(value.get("progress").is_none());
}

#[test]
fn test_reader_tolerates_additive_fields() {
    let store = demo_store();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    assert!(store.export_project("Weather Station IoT", &path));

    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    value["future_field"] = serde_json::json!({"introduced": "later"});

    let parsed: Project = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.name, "Weather Station IoT");
}

#[test]
fn test_export_unknown_project_returns_false() {
    let store = demo_store();
    let dir = TempDir::new().unwrap();
    assert!(!store.export_project("Missing", dir.path().join("missing.json")));
}

#[test]
fn test_export_failure_does_not_panic() {
    let store = demo_store();
    let dir = TempDir::new().unwrap();
    // Destination inside a directory that was never created.
    let path = dir.path().join("no-such-subdir").join("out.json");
    assert!(!store.export_project("Weather Station IoT", &path));
}
