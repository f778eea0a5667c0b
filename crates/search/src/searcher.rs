//! The searcher: propose from one example, verify on all.
//!
//! # Algorithm
//!
//! The searcher walks the configured families in priority order. For each
//! family it:
//!
//! 1. Runs the shape pre-check ([`is_compatible`](crate::is_compatible)) and
//!    skips the family entirely if it fails.
//! 2. Generates the family's candidates from the first training example.
//! 3. Validates each candidate, in generation order, against every example
//!    in scope.
//!
//! The first candidate that validates wins. Family order and within-family
//! order are fixed, and generation depends only on the first example, so
//! searching the same task twice always yields the same result.
//!
//! # Fallback
//!
//! A search never fails. If no candidate validates, the result carries
//! [`Candidate::Identity`](crate::Candidate::Identity) at the score floor and
//! a [`Status`] saying why the search ended.
//!
//! # Observer Events
//!
//! The searcher emits one [`Event`] per skipped family, per failed
//! generation, and per validated candidate. Observers can return
//! [`Action::StopEarly`] to halt immediately, [`Action::SkipFamily`] to
//! abandon the rest of a family after a rejection, or [`Action::Discard`] to
//! veto a candidate that validated.

mod action;
mod config;
mod event;
mod run;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{SolveResult, Status};

use gridwise_core::{Observer, Task};

use run::run;

/// Searches the candidate library for a transformation that explains `task`.
///
/// The observer receives an [`Event`] for every skipped family, failed
/// generation, and validated candidate.
/// See the [module docs](self) for details on observer actions.
pub fn solve<Obs>(task: &Task, config: &Config, observer: Obs) -> SolveResult
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    run(task, config, observer)
}

/// Searches the candidate library without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved(task: &Task, config: &Config) -> SolveResult {
    solve(task, config, ())
}
