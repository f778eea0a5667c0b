//! Solves a handful of small tasks with tracing enabled.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p gridwise-observers --example solve
//! ```

use gridwise_core::{Example, Grid, InvalidGridError, Observer, Task};
use gridwise_observers::{Tally, Trace};
use gridwise_search::{Action, Config, Event, solve};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::default();
    let mut tally = Tally::new();

    for task in tasks()? {
        let mut trace = Trace::new(task.id());
        let result = solve(&task, &config, |event: &Event<'_>| -> Option<Action> {
            Observer::<_, Action>::observe(&mut trace, event);
            tally.record(event);
            None
        });

        println!(
            "{:<10} {:<18} score {:>4}  {}",
            result.task_id,
            format!("{:?}", result.status),
            result.score,
            result.candidate,
        );
    }

    println!(
        "\n{} candidates validated, {} accepted, {} families skipped, {} failed to generate",
        tally.candidates(),
        tally.accepted(),
        tally.skipped(),
        tally.failed(),
    );

    Ok(())
}

type BoxError = Box<dyn std::error::Error>;

fn grid(rows: &[&[u8]]) -> Result<Grid, InvalidGridError> {
    Grid::from_rows(rows)
}

fn task(id: &str, pairs: &[(&[&[u8]], &[&[u8]])]) -> Result<Task, BoxError> {
    let train = pairs
        .iter()
        .map(|&(input, output)| Ok(Example::new(grid(input)?, grid(output)?)))
        .collect::<Result<Vec<_>, InvalidGridError>>()?;
    Ok(Task::new(id, train, vec![])?)
}

fn tasks() -> Result<Vec<Task>, BoxError> {
    Ok(vec![
        task("rotate", &[(&[&[1, 2], &[3, 4]], &[&[3, 1], &[4, 2]])])?,
        task(
            "recolor",
            &[
                (&[&[1, 2], &[2, 1]], &[&[2, 1], &[1, 2]]),
                (&[&[2, 2], &[1, 3]], &[&[1, 1], &[2, 3]]),
            ],
        )?,
        task("scale", &[(&[&[7]], &[&[7, 7, 7], &[7, 7, 7], &[7, 7, 7]])])?,
        task(
            "frame",
            &[(
                &[&[1, 2], &[3, 4]],
                &[&[0, 0, 0, 0], &[0, 1, 2, 0], &[0, 3, 4, 0], &[0, 0, 0, 0]],
            )],
        )?,
        task("count", &[(&[&[0, 4], &[4, 4]], &[&[3]])])?,
        task("unsolved", &[(&[&[1, 1]], &[&[2, 3]])])?,
    ])
}
