use gridwise_core::Observer;
use gridwise_search::Family;

use crate::traits::{CanSkipFamily, HasCandidate, HasFamily};

/// An observer that evaluates at most `limit` candidates from each family.
///
/// Once a family reaches the limit, the rest of its candidates are skipped.
/// The count restarts whenever a candidate from another family arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyCap {
    limit: usize,
    current: Option<(Family, usize)>,
}

impl FamilyCap {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            current: None,
        }
    }

    fn count<E: HasFamily + HasCandidate>(&mut self, event: &E) -> bool {
        if event.candidate().is_none() {
            return false;
        }
        let family = event.family();
        let seen = match self.current {
            Some((current, seen)) if current == family => seen + 1,
            _ => 1,
        };
        self.current = Some((family, seen));
        seen >= self.limit
    }
}

impl<E, A> Observer<E, A> for FamilyCap
where
    E: HasFamily + HasCandidate,
    A: CanSkipFamily,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.count(event).then(A::skip_family)
    }
}

impl<E, A> Observer<E, A> for &mut FamilyCap
where
    E: HasFamily + HasCandidate,
    A: CanSkipFamily,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.count(event).then(A::skip_family)
    }
}
