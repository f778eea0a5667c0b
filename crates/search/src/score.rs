use crate::Candidate;

/// The size budget a candidate's program is scored against.
pub const BUDGET: usize = 2500;

/// The floor every score is clamped to.
pub const MIN_SCORE: usize = 1;

/// Scores a candidate by its serialized size: `max(1, BUDGET - size)`.
///
/// Smaller programs score higher. The score never affects whether a
/// candidate is correct, only how it ranks in reporting.
#[must_use]
pub fn score(candidate: &Candidate) -> usize {
    BUDGET.saturating_sub(candidate.size()).max(MIN_SCORE)
}
