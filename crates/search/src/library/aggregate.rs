use crate::{Aggregate, Candidate};

/// Proposes every whole-grid reduction.
pub(super) fn generate() -> Vec<Candidate> {
    Aggregate::ALL.into_iter().map(Candidate::Aggregate).collect()
}
