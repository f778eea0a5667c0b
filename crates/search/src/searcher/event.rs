use crate::{Candidate, Family, InductionError, Mismatch};

/// Events emitted by the searcher.
///
/// Candidate events carry `attempt`, the 1-based count of candidates
/// validated so far for this task, including the current one.
#[derive(Debug)]
pub enum Event<'a> {
    /// The family failed its shape pre-check and was never generated.
    FamilySkipped { family: Family },

    /// The family could not propose any candidate from the first example.
    GenerationFailed {
        family: Family,
        error: &'a InductionError,
    },

    /// The candidate failed validation.
    Rejected {
        candidate: &'a Candidate,
        mismatch: &'a Mismatch,
        attempt: usize,
    },

    /// The candidate reproduced every example in scope.
    Accepted {
        candidate: &'a Candidate,
        attempt: usize,
    },
}

impl Event<'_> {
    /// Returns the family the event concerns.
    #[must_use]
    pub fn family(&self) -> Family {
        match self {
            Self::FamilySkipped { family } | Self::GenerationFailed { family, .. } => *family,
            Self::Rejected { candidate, .. } | Self::Accepted { candidate, .. } => {
                candidate.family()
            }
        }
    }

    /// Returns the candidate, for candidate events.
    #[must_use]
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Rejected { candidate, .. } | Self::Accepted { candidate, .. } => Some(*candidate),
            Self::FamilySkipped { .. } | Self::GenerationFailed { .. } => None,
        }
    }
}
