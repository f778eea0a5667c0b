use crate::Candidate;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// A candidate reproduced every example in scope.
    Solved,

    /// Every family was exhausted without a match.
    NoCandidateFound,

    /// The configured candidate budget ran out before a match.
    BudgetExhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The outcome of searching one task.
///
/// A search always produces a result. When nothing validated, `candidate` is
/// [`Candidate::Identity`] and `score` is [`MIN_SCORE`](crate::MIN_SCORE).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// The id of the task that was searched.
    pub task_id: String,

    /// Final search status.
    pub status: Status,

    /// The winning candidate, or the identity fallback.
    pub candidate: Candidate,

    /// Competition score of the result.
    pub score: usize,

    /// Number of candidates validated.
    pub attempts: usize,
}

impl SolveResult {
    /// Returns true if a candidate validated.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }
}
