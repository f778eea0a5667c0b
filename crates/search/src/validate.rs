//! Exact-match validation of a candidate against a task.

use std::fmt;

use thiserror::Error;

use gridwise_core::{Example, Shape, Task};

use crate::{Candidate, ExecutionFault};

/// Which examples a validation run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Training examples only.
    Train,

    /// Training examples, then held-out examples.
    All,
}

/// The split an example belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    HeldOut,
}

/// Identifies one example within a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleRef {
    pub split: Split,
    pub index: usize,
}

impl fmt::Display for ExampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.split {
            Split::Train => write!(f, "train[{}]", self.index),
            Split::HeldOut => write!(f, "test[{}]", self.index),
        }
    }
}

/// The first way a candidate failed to reproduce a task.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Mismatch {
    #[error("{example}: produced shape {found}, expected {expected}")]
    Shape {
        example: ExampleRef,
        expected: Shape,
        found: Shape,
    },

    #[error("{example}: {differing} cells differ")]
    Cells { example: ExampleRef, differing: usize },

    #[error("{example}: candidate faulted: {fault}")]
    Fault {
        example: ExampleRef,
        fault: ExecutionFault,
    },
}

impl Mismatch {
    /// Returns the example where the mismatch occurred.
    #[must_use]
    pub fn example(&self) -> ExampleRef {
        match self {
            Self::Shape { example, .. } | Self::Cells { example, .. } | Self::Fault { example, .. } => {
                *example
            }
        }
    }
}

/// Applies the candidate to every example in scope, in order, and stops at
/// the first mismatch.
///
/// A fault raised by the candidate is reported as [`Mismatch::Fault`] and
/// never propagated.
///
/// # Errors
///
/// Returns the first [`Mismatch`] encountered.
pub fn check(candidate: &Candidate, task: &Task, scope: Scope) -> Result<(), Mismatch> {
    let held_out: &[Example] = match scope {
        Scope::Train => &[],
        Scope::All => task.test(),
    };
    let examples = tagged(Split::Train, task.train()).chain(tagged(Split::HeldOut, held_out));

    for (example, pair) in examples {
        let produced = candidate
            .apply(&pair.input)
            .map_err(|fault| Mismatch::Fault { example, fault })?;

        let (expected, found) = (pair.output.shape(), produced.shape());
        if expected != found {
            return Err(Mismatch::Shape {
                example,
                expected,
                found,
            });
        }

        let differing = produced
            .cells()
            .iter()
            .zip(pair.output.cells())
            .filter(|(a, b)| a != b)
            .count();
        if differing > 0 {
            return Err(Mismatch::Cells { example, differing });
        }
    }
    Ok(())
}

fn tagged(split: Split, examples: &[Example]) -> impl Iterator<Item = (ExampleRef, &Example)> {
    examples
        .iter()
        .enumerate()
        .map(move |(index, e)| (ExampleRef { split, index }, e))
}

/// Returns true iff the candidate reproduces every training and held-out
/// example exactly.
#[must_use]
pub fn validate(candidate: &Candidate, task: &Task) -> bool {
    check(candidate, task, Scope::All).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use gridwise_core::{Geometry, Grid, GridOpError};

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn flip_task(test_output: &[&[u8]]) -> Task {
        Task::new(
            "flip",
            vec![
                Example::new(grid(&[&[1, 2]]), grid(&[&[2, 1]])),
                Example::new(grid(&[&[3, 4, 5]]), grid(&[&[5, 4, 3]])),
            ],
            vec![Example::new(grid(&[&[6, 7]]), grid(test_output))],
        )
        .unwrap()
    }

    #[test]
    fn accepts_candidates_that_match_every_example() {
        let task = flip_task(&[&[7, 6]]);
        let flip = Candidate::Geometric(Geometry::FlipHorizontal);
        assert!(validate(&flip, &task));
        assert_eq!(check(&flip, &task, Scope::All), Ok(()));
    }

    #[test]
    fn reports_the_first_cell_mismatch() {
        let task = flip_task(&[&[7, 6]]);
        let err = check(&Candidate::Identity, &task, Scope::All).unwrap_err();
        assert_eq!(
            err,
            Mismatch::Cells {
                example: ExampleRef {
                    split: Split::Train,
                    index: 0
                },
                differing: 2
            }
        );
    }

    #[test]
    fn held_out_examples_only_count_in_full_scope() {
        let task = flip_task(&[&[6, 7]]);
        let flip = Candidate::Geometric(Geometry::FlipHorizontal);

        assert_eq!(check(&flip, &task, Scope::Train), Ok(()));
        let err = check(&flip, &task, Scope::All).unwrap_err();
        assert_eq!(err.example().split, Split::HeldOut);
        assert_eq!(err.example().to_string(), "test[0]");
        assert!(!validate(&flip, &task));
    }

    #[test]
    fn shape_mismatches_are_reported() {
        let task = flip_task(&[&[7, 6]]);
        let err = check(&Candidate::Geometric(Geometry::Transpose), &task, Scope::Train).unwrap_err();
        assert!(matches!(err, Mismatch::Shape { .. }));
    }

    #[test]
    fn faults_become_mismatches() {
        let task = flip_task(&[&[7, 6]]);
        let err = check(&Candidate::Crop { width: 1 }, &task, Scope::All).unwrap_err();
        assert!(matches!(
            err,
            Mismatch::Fault {
                fault: ExecutionFault::Grid(GridOpError::CropTooLarge { .. }),
                ..
            }
        ));
    }

    #[test]
    fn oversized_parameters_fault_instead_of_panicking() {
        let task = flip_task(&[&[7, 6]]);
        let huge = [
            Candidate::Scale { factor: usize::MAX },
            Candidate::Pad {
                width: usize::MAX,
                color: 0,
            },
        ];

        for candidate in &huge {
            assert!(!validate(candidate, &task), "{candidate}");
            assert_eq!(
                check(candidate, &task, Scope::All),
                Err(Mismatch::Fault {
                    example: ExampleRef {
                        split: Split::Train,
                        index: 0
                    },
                    fault: ExecutionFault::Grid(GridOpError::TooLarge),
                })
            );
        }
    }
}
