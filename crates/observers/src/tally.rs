use std::collections::BTreeMap;

use gridwise_core::Observer;
use gridwise_search::{Event, Family};

/// An observer that counts search events.
///
/// Pass `&mut Tally` to the searcher to read the counts once the search
/// returns. A tally can be reused across tasks to aggregate a whole run.
///
/// ```
/// use gridwise_core::{Example, Grid, Task};
/// use gridwise_observers::Tally;
/// use gridwise_search::{Config, solve};
///
/// let input = Grid::new(vec![vec![1, 2]]).unwrap();
/// let output = Grid::new(vec![vec![2, 1]]).unwrap();
/// let task = Task::new("flip", vec![Example::new(input, output)], vec![]).unwrap();
///
/// let mut tally = Tally::new();
/// let result = solve(&task, &Config::default(), &mut tally);
///
/// assert_eq!(tally.accepted(), 1);
/// assert_eq!(tally.candidates(), result.attempts);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    skipped: usize,
    failed: usize,
    accepted: usize,
    rejected: BTreeMap<Family, usize>,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single event.
    pub fn record(&mut self, event: &Event<'_>) {
        match event {
            Event::FamilySkipped { .. } => self.skipped += 1,
            Event::GenerationFailed { .. } => self.failed += 1,
            Event::Rejected { .. } => *self.rejected.entry(event.family()).or_default() += 1,
            Event::Accepted { .. } => self.accepted += 1,
        }
    }

    /// Families skipped by the shape pre-check.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Families whose generation failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Candidates that validated, including any an observer discarded.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Candidates that failed validation.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Rejections of `family`'s candidates.
    #[must_use]
    pub fn rejected_in(&self, family: Family) -> usize {
        self.rejected.get(&family).copied().unwrap_or(0)
    }

    /// Candidates validated, accepted or not.
    #[must_use]
    pub fn candidates(&self) -> usize {
        self.accepted + self.rejected()
    }
}

impl<A> Observer<Event<'_>, A> for Tally {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut Tally` to be passed to [`solve`](gridwise_search::solve),
/// which takes its observer by value.
impl<A> Observer<Event<'_>, A> for &mut Tally {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.record(event);
        None
    }
}
