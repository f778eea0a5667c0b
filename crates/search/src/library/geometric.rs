use gridwise_core::{Example, Geometry};

use crate::Candidate;

/// Proposes every geometric operation whose output shape fits the example.
pub(super) fn generate(example: &Example) -> Vec<Candidate> {
    let (input, output) = (example.input.shape(), example.output.shape());
    Geometry::ALL
        .into_iter()
        .filter(|op| op.output_shape(input) == output)
        .map(Candidate::Geometric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use gridwise_core::Grid;

    fn example(input: &[&[u8]], output: &[&[u8]]) -> Example {
        Example::new(Grid::from_rows(input).unwrap(), Grid::from_rows(output).unwrap())
    }

    #[test]
    fn square_grids_propose_all_six() {
        let ex = example(&[&[1, 2], &[3, 4]], &[&[3, 1], &[4, 2]]);
        assert_eq!(generate(&ex).len(), 6);
    }

    #[test]
    fn rectangular_grids_propose_only_shape_compatible_ops() {
        let same = example(&[&[1, 2, 3]], &[&[3, 2, 1]]);
        assert_eq!(
            generate(&same),
            vec![
                Candidate::Geometric(Geometry::Rotate180),
                Candidate::Geometric(Geometry::FlipHorizontal),
                Candidate::Geometric(Geometry::FlipVertical),
            ]
        );

        let swapped = example(&[&[1, 2, 3]], &[&[1], &[2], &[3]]);
        assert_eq!(
            generate(&swapped),
            vec![
                Candidate::Geometric(Geometry::Rotate90),
                Candidate::Geometric(Geometry::Rotate270),
                Candidate::Geometric(Geometry::Transpose),
            ]
        );
    }
}
