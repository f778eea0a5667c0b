use std::thread;

use gridwise_core::Task;
use gridwise_observers::Tally;
use gridwise_search::{
    Candidate, Config, Family, MIN_SCORE, SolveResult, Status, score, solve, solve_unobserved,
    validate,
};
use integration_tests::{FIXTURES, load};

fn solved(name: &str) -> SolveResult {
    let result = solve_unobserved(&load(name), &Config::default());
    assert!(result.is_solved(), "{name} was not solved: {result:?}");
    result
}

#[test]
fn solves_each_family_from_json() {
    let expected = [
        ("rotate", "rot90(g)"),
        ("shift", "shift(g,5)"),
        ("replace", "replace(g,2,4)"),
        ("recolor", "map(g,{1:2,2:1})"),
        ("scale", "scale(g,2)"),
        ("tile", "tile(g,3,3,[(0,1),(0,2),(1,0),(1,1),(1,2),(2,1),(2,2)])"),
        ("pad", "pad(g,1,0)"),
        ("crop", "crop(g,1)"),
        ("count", "count_nonzero(g)"),
        ("subsample", "subsample(g,2,0)"),
        ("last_row", "g[-1]"),
        ("mirror", "max(g,fliplr(g))"),
        ("frame", "outline(g,4)"),
        ("fill", "fill(g,most_common(g))"),
    ];

    for (name, program) in expected {
        let result = solved(name);
        assert_eq!(result.candidate.program(), program, "{name}");
        assert_eq!(result.task_id, name);
    }
}

#[test]
fn winners_validate_and_score_by_size() {
    for name in FIXTURES {
        let task = load(name);
        let result = solve_unobserved(&task, &Config::default());
        if result.is_solved() {
            assert!(validate(&result.candidate, &task), "{name}");
            assert_eq!(result.score, score(&result.candidate), "{name}");
        }
    }
}

#[test]
fn unsolvable_task_falls_back_to_identity() {
    let result = solve_unobserved(&load("unsolvable"), &Config::default());

    assert_eq!(result.status, Status::NoCandidateFound);
    assert_eq!(result.candidate, Candidate::Identity);
    assert_eq!(result.score, MIN_SCORE);
}

#[test]
fn held_out_examples_guard_against_overfitting() {
    let task = load("overfit");

    let train_only = Config::new(10_000, false).unwrap();
    assert_eq!(
        solve_unobserved(&task, &train_only).candidate.program(),
        "rot180(g)"
    );

    let result = solve_unobserved(&task, &Config::default());
    assert_eq!(result.candidate.family(), Family::ColorMap);
    assert!(validate(&result.candidate, &task));
}

#[test]
fn tally_agrees_with_attempt_counts() {
    let config = Config::default();
    let mut tally = Tally::new();
    let mut attempts = 0;

    for name in FIXTURES {
        attempts += solve(&load(name), &config, &mut tally).attempts;
    }

    assert_eq!(tally.candidates(), attempts);
    assert_eq!(tally.accepted(), FIXTURES.len() - 1);
}

#[test]
fn parallel_searches_match_sequential_ones() {
    let tasks: Vec<Task> = FIXTURES.iter().map(|name| load(name)).collect();
    let config = &Config::default();

    let sequential: Vec<SolveResult> = tasks
        .iter()
        .map(|task| solve_unobserved(task, config))
        .collect();

    let parallel: Vec<SolveResult> = thread::scope(|s| {
        let handles: Vec<_> = tasks
            .iter()
            .map(|task| s.spawn(move || solve_unobserved(task, config)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn malformed_tasks_are_rejected_at_load() {
    let empty = r#"{"train": [], "test": []}"#;
    assert!(serde_json::from_str::<Task>(empty).is_err());

    let ragged = r#"{"train": [{"input": [[1, 2], [3]], "output": [[1]]}]}"#;
    assert!(serde_json::from_str::<Task>(ragged).is_err());

    let off_palette = r#"{"train": [{"input": [[10]], "output": [[1]]}]}"#;
    assert!(serde_json::from_str::<Task>(off_palette).is_err());
}
