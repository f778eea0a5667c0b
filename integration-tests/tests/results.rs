use gridwise_search::{Candidate, Config, SolveResult, TileLayout, solve_unobserved};
use integration_tests::load;
use serde_json::{Value, json};

#[test]
fn results_serialize_to_readable_json() {
    let result = solve_unobserved(&load("rotate"), &Config::default());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["task_id"], "rotate");
    assert_eq!(value["status"], "solved");
    assert_eq!(value["candidate"], json!({ "geometric": "rotate90" }));
    assert_eq!(value["attempts"], 2);
}

#[test]
fn fallback_results_serialize_the_identity() {
    let result = solve_unobserved(&load("unsolvable"), &Config::default());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "no_candidate_found");
    assert_eq!(value["candidate"], Value::from("identity"));
    assert_eq!(value["score"], 1);
}

#[test]
fn results_round_trip_through_json() {
    let results: Vec<SolveResult> = ["tile", "recolor", "count", "last_row"]
        .into_iter()
        .map(|name| solve_unobserved(&load(name), &Config::default()))
        .collect();

    let json = serde_json::to_string(&results).unwrap();
    let parsed: Vec<SolveResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, results);

    let Candidate::Tile(TileLayout { occupied, .. }) = &parsed[0].candidate else {
        panic!("expected a tile candidate, got {}", parsed[0].candidate);
    };
    assert_eq!(occupied.len(), 7);
}
