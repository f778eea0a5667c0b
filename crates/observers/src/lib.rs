//! Reusable observers for the Gridwise searcher.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! plug into [`gridwise_search::solve`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasFamily`], [`HasCandidate`], [`CanStopEarly`], [`CanSkipFamily`],
//!   [`CanDiscard`])
//!
//! # Observers
//!
//! - [`Trace`] — forwards every event to `tracing`
//! - [`Tally`] — counts events, per family where it matters
//! - [`FamilyCap`] — limits how many candidates each family may try
//! - [`Veto`] — discards answers known to be wrong
//!
//! [`Observer`]: gridwise_core::Observer
//! [`HasFamily`]: traits::HasFamily
//! [`HasCandidate`]: traits::HasCandidate
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanSkipFamily`]: traits::CanSkipFamily
//! [`CanDiscard`]: traits::CanDiscard

pub mod traits;

mod cap;
mod tally;
mod trace;
mod veto;

pub use cap::FamilyCap;
pub use tally::Tally;
pub use trace::Trace;
pub use veto::Veto;
