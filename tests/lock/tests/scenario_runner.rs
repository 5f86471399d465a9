//! Lock tests for scenario files and reports.

use bisect_harness::runner::{render_outcome, run_scenario, RunError};
use bisect_harness::scenario::{load_scenario, ScenarioError, ScenarioV1};
use bisect_search::search::SearchResult;
use bisect_search::trace::search_traced;

fn write_scenario(
    dir: &tempfile::TempDir,
    name: &str,
    json: &serde_json::Value,
) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(json).unwrap()).unwrap();
    path
}

#[test]
fn file_scenario_matches_in_memory_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let scenario = ScenarioV1::default();
    let path = write_scenario(&dir, "demo.json", &scenario.to_json_value());

    let loaded = load_scenario(&path).unwrap();
    assert_eq!(loaded, scenario);
    assert_eq!(
        run_scenario(&loaded).unwrap().digest,
        run_scenario(&scenario).unwrap().digest
    );
}

#[test]
fn report_trace_digests_match_direct_traces() {
    let scenario = ScenarioV1 {
        scenario_id: "dups".into(),
        sequence: vec![-8, -8, 0, 4, 4, 4, 16],
        targets: vec![4, -8, 5, 16, -100],
    };
    let report = run_scenario(&scenario).unwrap();
    for outcome in &report.outcomes {
        let trace = search_traced(&scenario.sequence, &outcome.target);
        assert_eq!(outcome.result, trace.result);
        assert_eq!(outcome.probe_count, trace.probe_count());
        assert_eq!(outcome.trace_digest, trace.digest().unwrap());
        if let SearchResult::Found(index) = outcome.result {
            assert_eq!(scenario.sequence[index], outcome.target);
        }
    }
    assert_eq!(report.found_count(), 3);
}

#[test]
fn pretty_printed_and_compact_files_produce_same_report() {
    let dir = tempfile::tempdir().unwrap();
    let scenario = ScenarioV1::default();
    let pretty = write_scenario(&dir, "pretty.json", &scenario.to_json_value());
    let compact = dir.path().join("compact.json");
    std::fs::write(&compact, serde_json::to_vec(&scenario.to_json_value()).unwrap()).unwrap();

    let a = run_scenario(&load_scenario(&pretty).unwrap()).unwrap();
    let b = run_scenario(&load_scenario(&compact).unwrap()).unwrap();
    assert_eq!(a.digest, b.digest);
}

#[test]
fn unsorted_file_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scenario(
        &dir,
        "bad.json",
        &serde_json::json!({
            "schema_version": "scenario.v1",
            "scenario_id": "bad",
            "sequence": [1, 2, 3, 2],
            "targets": [2],
        }),
    );
    assert_eq!(
        load_scenario(&path),
        Err(ScenarioError::UnsortedSequence { index: 3 })
    );
}

#[test]
fn run_rejects_unsorted_in_memory_scenario() {
    let scenario = ScenarioV1 {
        sequence: vec![10, 2],
        ..ScenarioV1::default()
    };
    assert!(matches!(
        run_scenario(&scenario),
        Err(RunError::ScenarioRejected(ScenarioError::UnsortedSequence { index: 1 }))
    ));
}

#[test]
fn rendered_demo_lines() {
    let report = run_scenario(&ScenarioV1::default()).unwrap();
    let lines: Vec<String> = report.outcomes.iter().map(render_outcome).collect();
    assert_eq!(lines[0], "Element Not Found");
    assert_eq!(lines[1], "Element found at 0th index");
    assert_eq!(lines[2], "Element found at 3th index");
}
