//! Capability traits for reusable search observers.
//!
//! These traits abstract over the searcher's event and action types, so an
//! observer can be written against what it needs rather than against
//! [`Event`] and [`Action`] directly.
//!
//! # Event traits
//!
//! - [`HasFamily`] — events tied to a transformation family
//! - [`HasCandidate`] — events that may carry a candidate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can halt the search
//! - [`CanSkipFamily`] — actions that can abandon the current family
//! - [`CanDiscard`] — actions that can veto a validated candidate
//!
//! # Example
//!
//! ```rust
//! use gridwise_core::Observer;
//! use gridwise_observers::traits::{CanStopEarly, HasCandidate};
//!
//! /// Stops the search after a fixed number of candidate events.
//! struct Patience {
//!     remaining: usize,
//! }
//!
//! impl<E: HasCandidate, A: CanStopEarly> Observer<E, A> for Patience {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         event.candidate()?;
//!         self.remaining = self.remaining.saturating_sub(1);
//!         (self.remaining == 0).then(A::stop_early)
//!     }
//! }
//! ```

use gridwise_search::{Action, Candidate, Event, Family};

/// An event that concerns a transformation family.
pub trait HasFamily {
    /// Returns the family this event concerns.
    fn family(&self) -> Family;
}

/// An event that may carry a candidate.
pub trait HasCandidate {
    /// Returns the candidate, if this event is about one.
    fn candidate(&self) -> Option<&Candidate>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

/// An action type that can abandon the rest of a family.
pub trait CanSkipFamily {
    /// Returns the action that skips the remaining candidates of a family.
    fn skip_family() -> Self;
}

/// An action type that can veto a validated candidate.
pub trait CanDiscard {
    /// Returns the action that discards a validated candidate.
    fn discard() -> Self;
}

// --- Event impls ---

impl HasFamily for Event<'_> {
    fn family(&self) -> Family {
        Event::family(self)
    }
}

impl HasCandidate for Event<'_> {
    fn candidate(&self) -> Option<&Candidate> {
        Event::candidate(self)
    }
}

// --- Action impls ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanSkipFamily for Action {
    fn skip_family() -> Self {
        Self::SkipFamily
    }
}

impl CanDiscard for Action {
    fn discard() -> Self {
        Self::Discard
    }
}
