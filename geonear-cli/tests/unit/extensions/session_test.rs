use super::*;
use std::fs;

const SOURCE_CSV: &str = "city,country,latitude,longitude\n\
                          Paris,France,48.8566,2.3522\n\
                          Lyon,France,45.7640,4.8357\n\
                          Montreal,Canada,45.5017,-73.5673\n";

fn create_session_paths(dir: &tempfile::TempDir) -> SessionPaths {
    let path_string = |name: &str| dir.path().join(name).to_str().unwrap().to_string();

    SessionPaths { source: path_string("points.csv"), storage: path_string("points.json"), report: path_string("distances.csv") }
}

#[test]
fn can_require_load_before_persist() {
    let dir = tempfile::tempdir().unwrap();
    let paths = create_session_paths(&dir);
    let mut session = Session::default();

    let result = session.persist(&paths);

    assert!(matches!(result, Err(SessionError::NotReady(_))));
    assert!(!session.is_persisted());
}

#[test]
fn can_require_persist_before_compute() {
    let dir = tempfile::tempdir().unwrap();
    let paths = create_session_paths(&dir);
    fs::write(&paths.source, SOURCE_CSV).unwrap();
    let mut session = Session::default();

    session.load(&paths).unwrap();
    let result = session.compute(&paths);

    assert!(session.is_loaded());
    assert!(matches!(result, Err(SessionError::NotReady(_))));
}

#[test]
fn can_fail_load_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let paths = create_session_paths(&dir);
    let mut session = Session::default();

    let result = session.load(&paths);

    assert!(matches!(result, Err(SessionError::Failed(_))));
    assert!(!session.is_loaded());
}

#[test]
fn can_run_gated_steps_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let paths = create_session_paths(&dir);
    fs::write(&paths.source, SOURCE_CSV).unwrap();
    let mut session = Session::default();

    let loaded = session.load(&paths).unwrap().len();
    session.persist(&paths).unwrap();
    let closest = session.compute(&paths).unwrap().expect("no pair found");

    assert_eq!(loaded, 3);
    assert_eq!(closest.first.name, "Paris");
    assert_eq!(closest.second.name, "Lyon");
    assert!((closest.distance_km - 391.49893).abs() < 1e-5);

    let report = fs::read_to_string(&paths.report).unwrap();
    assert_eq!(report.lines().count(), 4);

    let storage = fs::read_to_string(&paths.storage).unwrap();
    assert!(storage.contains("\"Name\": \"Paris\""));
}
