use gridwise_core::{Example, Shape};

use crate::{Candidate, Edge};

/// Proposes every `(stride, offset)` pair whose subsampled shape equals the
/// output shape, strides ascending, then offsets ascending.
pub(super) fn subsample(example: &Example) -> Vec<Candidate> {
    let (input, output) = (example.input.shape(), example.output.shape());
    let max_stride = input.rows.max(input.cols);

    let mut candidates = Vec::new();
    for stride in 2..=max_stride {
        for offset in 0..stride {
            if subsampled(input, stride, offset) == Some(output) {
                candidates.push(Candidate::Subsample { stride, offset });
            }
        }
    }
    candidates
}

/// Proposes the edge rows or columns whose shape equals the output shape.
pub(super) fn edges(example: &Example) -> Vec<Candidate> {
    let (input, output) = (example.input.shape(), example.output.shape());
    Edge::ALL
        .into_iter()
        .filter(|edge| edge.output_shape(input) == output)
        .map(Candidate::Edge)
        .collect()
}

fn subsampled(shape: Shape, stride: usize, offset: usize) -> Option<Shape> {
    if offset >= shape.rows || offset >= shape.cols {
        return None;
    }
    Some(Shape::new(
        (shape.rows - offset).div_ceil(stride),
        (shape.cols - offset).div_ceil(stride),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use gridwise_core::Grid;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn subsample_proposals_match_the_output_shape() {
        let input = grid(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 1, 2, 3], &[4, 5, 6, 7]]);
        let ex = Example::new(input, grid(&[&[1, 3], &[9, 2]]));
        assert_eq!(
            subsample(&ex),
            vec![
                Candidate::Subsample { stride: 2, offset: 0 },
                Candidate::Subsample { stride: 2, offset: 1 },
                Candidate::Subsample { stride: 3, offset: 0 },
            ]
        );
    }

    #[test]
    fn edges_match_row_or_column_shapes() {
        let input = grid(&[&[1, 2, 3], &[4, 5, 6]]);
        let row = Example::new(input.clone(), grid(&[&[4, 5, 6]]));
        assert_eq!(
            edges(&row),
            vec![Candidate::Edge(Edge::FirstRow), Candidate::Edge(Edge::LastRow)]
        );

        let col = Example::new(input, grid(&[&[1], &[4]]));
        assert_eq!(
            edges(&col),
            vec![Candidate::Edge(Edge::FirstColumn), Candidate::Edge(Edge::LastColumn)]
        );
    }
}
