use gridwise_core::Observer;
use gridwise_search::Event;
use tracing::{debug, trace};

/// An observer that forwards search events to [`tracing`].
///
/// Skipped families and rejected candidates are logged at `TRACE`, failed
/// generation and accepted candidates at `DEBUG`. Every record carries the
/// task id so interleaved searches stay readable.
///
/// `Trace` never returns an action.
///
/// # Example
///
/// ```
/// use gridwise_core::{Example, Grid, Task};
/// use gridwise_observers::Trace;
/// use gridwise_search::{Config, solve};
///
/// let grid = Grid::new(vec![vec![1, 2]]).unwrap();
/// let task = Task::new("copy", vec![Example::new(grid.clone(), grid)], vec![]).unwrap();
///
/// let result = solve(&task, &Config::default(), Trace::new(task.id()));
/// assert!(result.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Trace {
    task: String,
}

impl Trace {
    /// Creates a tracing observer labeled with `task`.
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }

    /// Returns the task label attached to every record.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }
}

impl<A> Observer<Event<'_>, A> for Trace {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        let task = self.task.as_str();
        match event {
            Event::FamilySkipped { family } => {
                trace!(task, %family, "family skipped by shape check");
            }
            Event::GenerationFailed { family, error } => {
                debug!(task, %family, %error, "generation failed");
            }
            Event::Rejected {
                candidate,
                mismatch,
                attempt,
            } => {
                trace!(task, attempt, %candidate, %mismatch, "rejected");
            }
            Event::Accepted { candidate, attempt } => {
                debug!(task, attempt, %candidate, "accepted");
            }
        }
        None
    }
}

impl<A> Observer<Event<'_>, A> for &mut Trace {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gridwise_core::{Example, Grid, Task};
    use gridwise_search::{Action, Candidate, Config, solve};
    use tracing_subscriber::fmt;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn never_changes_the_result() {
        let task = Task::new(
            "flip",
            vec![Example::new(grid(&[&[1, 2], &[3, 4]]), grid(&[&[2, 1], &[4, 3]]))],
            vec![],
        )
        .unwrap();
        let config = Config::default();

        let subscriber = fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let traced = tracing::subscriber::with_default(subscriber, || {
            solve(&task, &config, Trace::new(task.id()))
        });

        assert_eq!(traced, solve(&task, &config, ()));
        assert_eq!(traced.candidate.program(), "fliplr(g)");
    }

    #[test]
    fn returns_no_action() {
        let mut observer = Trace::new("t");
        let action: Option<Action> = observer.observe(&Event::Accepted {
            candidate: &Candidate::Identity,
            attempt: 1,
        });
        assert_eq!(action, None);
        assert_eq!(observer.task(), "t");
    }
}
