//! Cheap shape pre-checks that reject a whole family before any of its
//! candidates is generated or executed.
//!
//! Each check is a necessary condition on the first training example's
//! shapes, except for [`Family::Aggregate`], which requires every output in
//! the task to be a single cell, and [`Family::Fill`], which also requires the
//! first output to be a single color.

use gridwise_core::{Shape, Task};

use crate::{Family, library::border_width};

/// Returns true if `family` could possibly explain `task`.
///
/// A `false` result means every candidate the family would propose is
/// guaranteed to fail validation, so the family can be skipped outright.
#[must_use]
pub fn is_compatible(family: Family, task: &Task) -> bool {
    let first = task.first();
    let (input, output) = (first.input.shape(), first.output.shape());

    match family {
        Family::Identity
        | Family::ColorShift
        | Family::ColorReplace
        | Family::ColorMap
        | Family::Overlay
        | Family::Outline => input == output,
        Family::Geometric => input == output || input.transposed() == output,
        Family::Scale => {
            matches!(output.multiple_of(input), Some((rows, cols)) if rows == cols && rows > 1)
        }
        Family::Tile => {
            matches!(output.multiple_of(input), Some((rows, cols)) if rows * cols > 1)
        }
        Family::Border => {
            border_width(input, output).is_some() || border_width(output, input).is_some()
        }
        Family::Aggregate => task.examples().all(|e| e.output.shape() == Shape::new(1, 1)),
        Family::Subsample => output.rows < input.rows && output.cols < input.cols,
        Family::Edge => {
            (output.rows == 1 && output.cols == input.cols)
                || (output.cols == 1 && output.rows == input.rows)
        }
        Family::Fill => {
            input == output
                && first
                    .output
                    .get(0, 0)
                    .is_some_and(|color| first.output.is_filled_with(color))
        }
    }
}
