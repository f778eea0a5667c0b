//! Core types for the Gridwise search engine.
//!
//! This crate defines the shared value types that the candidate library,
//! validator, and searcher build on:
//!
//! - [`Grid`] — an immutable rectangular matrix of palette colors
//! - [`Geometry`] — the rotations, flips, and transpose of a grid
//! - [`ColorSet`] — a compact set of palette colors
//! - [`Example`] and [`Task`] — the input/output pairs a search explains
//! - [`Observer`] — receives search events and optionally returns control actions
//!
//! Grids are validated once at construction and are never mutated afterward.
//! Every grid operation returns a new grid.

mod color;
mod grid;
mod observer;
mod task;

pub use color::{BACKGROUND, Color, ColorSet, PALETTE_SIZE};
pub use grid::{Geometry, Grid, GridOpError, InvalidGridError, MAX_CELLS, Shape};
pub use observer::Observer;
pub use task::{Example, Task, TaskError};
