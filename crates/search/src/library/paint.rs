use gridwise_core::Example;

use crate::{Aggregate, Candidate, Paint};

/// Proposes painting the outer ring with the output's top-left color.
///
/// When the input's top-left corner already has that color, painting with
/// whatever the corner holds is proposed as well.
pub(super) fn outlines(example: &Example) -> Vec<Candidate> {
    let Some(color) = example.output.get(0, 0) else {
        return Vec::new();
    };
    let mut candidates = vec![Candidate::Outline(Paint::Color(color))];
    if example.input.get(0, 0) == Some(color) {
        candidates.push(Candidate::Outline(Paint::Corner));
    }
    candidates
}

/// Proposes every reduction of the input that yields the output's
/// top-left color.
pub(super) fn fills(example: &Example) -> Vec<Candidate> {
    let Some(color) = example.output.get(0, 0) else {
        return Vec::new();
    };
    Aggregate::ALL
        .into_iter()
        .filter(|aggregate| aggregate.evaluate(&example.input) == usize::from(color))
        .map(Candidate::Fill)
        .collect()
}
