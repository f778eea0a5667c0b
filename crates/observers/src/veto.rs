use gridwise_core::Observer;
use gridwise_search::Candidate;

use crate::traits::{CanDiscard, HasCandidate};

/// An observer that discards known-wrong answers.
///
/// Any listed candidate that validates is treated as a miss, and the search
/// moves on to the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Veto {
    banned: Vec<Candidate>,
    vetoed: usize,
}

impl Veto {
    #[must_use]
    pub fn new(banned: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            banned: banned.into_iter().collect(),
            vetoed: 0,
        }
    }

    /// Number of events answered with a discard.
    #[must_use]
    pub fn vetoed(&self) -> usize {
        self.vetoed
    }

    fn bans<E: HasCandidate>(&mut self, event: &E) -> bool {
        let banned = event
            .candidate()
            .is_some_and(|candidate| self.banned.contains(candidate));
        if banned {
            self.vetoed += 1;
        }
        banned
    }
}

impl<E: HasCandidate, A: CanDiscard> Observer<E, A> for Veto {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.bans(event).then(A::discard)
    }
}

impl<E: HasCandidate, A: CanDiscard> Observer<E, A> for &mut Veto {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.bans(event).then(A::discard)
    }
}
