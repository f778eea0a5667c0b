//! Hypothesis search and validation for grid puzzles.
//!
//! Given a [`Task`] of input/output grid examples, the searcher looks through
//! a library of parameterized transformations for one [`Candidate`] that
//! reproduces every example exactly, and reports it with a size-based score.
//!
//! The engine is built from a few small parts:
//!
//! - [`library`] — transformation families and their candidate generators
//! - [`inducer`] — color-map induction from a single example
//! - [`is_compatible`] — cheap shape pre-checks that skip whole families
//! - [`check`] / [`validate`] — exact-match verification on every example
//! - [`solve`] — the priority-ordered search with an identity fallback
//! - [`score()`] — the competition score of a candidate
//!
//! The engine is single-threaded, synchronous, and holds no global state.
//! Tasks are independent, so callers may solve many tasks in parallel.
//!
//! [`Task`]: gridwise_core::Task

mod candidate;
mod filter;
mod score;
mod searcher;
mod validate;

pub mod inducer;
pub mod library;

pub use candidate::{Aggregate, Candidate, Combine, Edge, ExecutionFault, Paint, TileLayout};
pub use filter::is_compatible;
pub use inducer::{ColorMap, InductionError, induce};
pub use library::{Family, generate};
pub use score::{BUDGET, MIN_SCORE, score};
pub use searcher::{
    Action, Config, ConfigError, Event, SolveResult, Status, solve, solve_unobserved,
};
pub use validate::{ExampleRef, Mismatch, Scope, Split, check, validate};
