use coachgraph_core::storage::{from_json_str, load_graph, save_graph, to_json_string};
use coachgraph_core::{limited_infection, ExecError};
use coachgraph_tests::{fixture_path, load_fixture};

#[test]
fn infected_graph_round_trips_through_file() -> Result<(), ExecError> {
    let mut g = load_fixture("graph3.json")?;
    assert!(limited_infection(&mut g, "saved", 3, 5).is_success());

    let path = std::env::temp_dir().join(format!("coachgraph-{}.json", std::process::id()));
    save_graph(&path, &g)?;
    let reloaded = load_graph(&path)?;
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded, g);
    assert!(reloaded.user("J").unwrap().has_feature("saved"));
    Ok(())
}

#[test]
fn serialized_record_lists_features_per_user() -> Result<(), ExecError> {
    let mut g = load_fixture("graph1.json")?;
    coachgraph_core::total_infection(&mut g, "B", "login")?;

    let json = to_json_string(&g)?;
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["users"].as_array().unwrap().len(), 4);
    assert_eq!(value["coaches"]["A"].as_array().unwrap().len(), 3);
    assert_eq!(value["features"]["D"][0], "login");

    assert_eq!(from_json_str(&json)?, g);
    Ok(())
}

#[test]
fn missing_file_is_a_storage_error() {
    let err = load_graph(fixture_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, ExecError::Storage(_)));
}
