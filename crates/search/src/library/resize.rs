use gridwise_core::{BACKGROUND, Example};

use crate::{Candidate, TileLayout};

/// Proposes a uniform scale-up when the output is the same integer multiple
/// of the input in both dimensions.
pub(super) fn scale(example: &Example) -> Vec<Candidate> {
    match example.output.shape().multiple_of(example.input.shape()) {
        Some((rows, cols)) if rows == cols && rows > 1 => vec![Candidate::Scale { factor: rows }],
        _ => Vec::new(),
    }
}

/// Proposes the tiling whose occupied blocks are read back from the output.
///
/// Every block of the output must be either a verbatim copy of the input or
/// entirely background; otherwise no tiling explains the example and nothing
/// is proposed. A block that qualifies as both (an all-background input) is
/// recorded as occupied.
pub(super) fn tile(example: &Example) -> Vec<Candidate> {
    let (input, output) = (&example.input, &example.output);
    let shape = input.shape();
    let Some((row_reps, col_reps)) = output.shape().multiple_of(shape) else {
        return Vec::new();
    };
    if row_reps * col_reps < 2 {
        return Vec::new();
    }

    let mut occupied = Vec::new();
    for block_row in 0..row_reps {
        for block_col in 0..col_reps {
            let Ok(block) = output.block(block_row * shape.rows, block_col * shape.cols, shape)
            else {
                return Vec::new();
            };
            if &block == input {
                occupied.push((block_row, block_col));
            } else if !block.is_filled_with(BACKGROUND) {
                return Vec::new();
            }
        }
    }

    if occupied.is_empty() {
        return Vec::new();
    }
    vec![Candidate::Tile(TileLayout {
        row_reps,
        col_reps,
        occupied,
    })]
}

#[cfg(test)]
mod tests {
    use super::*;

    use gridwise_core::{Grid, Shape};

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn scale_reads_the_factor_from_shapes() {
        let ex = Example::new(grid(&[&[7]]), grid(&[&[7, 7, 7], &[7, 7, 7], &[7, 7, 7]]));
        assert_eq!(scale(&ex), vec![Candidate::Scale { factor: 3 }]);
    }

    #[test]
    fn scale_requires_a_uniform_factor() {
        let ex = Example::new(grid(&[&[7]]), grid(&[&[7, 7, 7], &[7, 7, 7]]));
        assert!(scale(&ex).is_empty());
    }

    #[test]
    fn tile_reads_back_occupied_blocks() {
        let input = grid(&[&[1, 2], &[0, 3]]);
        let occupied = [(0, 1), (1, 0), (1, 1), (2, 2)];
        let output = input.tile(3, 3, &occupied).unwrap();
        assert_eq!(output.shape(), Shape::new(6, 6));

        let proposed = tile(&Example::new(input, output));
        assert_eq!(
            proposed,
            vec![Candidate::Tile(TileLayout {
                row_reps: 3,
                col_reps: 3,
                occupied: occupied.to_vec(),
            })]
        );
    }

    #[test]
    fn tile_rejects_blocks_that_are_neither_copy_nor_background() {
        let input = grid(&[&[1]]);
        let output = grid(&[&[1, 2]]);
        assert!(tile(&Example::new(input, output)).is_empty());
    }

    #[test]
    fn tile_rejects_all_background_outputs() {
        let input = grid(&[&[4]]);
        let output = grid(&[&[0, 0], &[0, 0]]);
        assert!(tile(&Example::new(input, output)).is_empty());
    }
}
