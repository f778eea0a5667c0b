use gridwise_core::{Example, PALETTE_SIZE};

use crate::Candidate;

/// Proposes every non-trivial uniform shift.
pub(super) fn shifts() -> Vec<Candidate> {
    (1..PALETTE_SIZE)
        .map(|offset| Candidate::ColorShift { offset })
        .collect()
}

/// Proposes replacing a color that vanished from the output with a color the
/// output introduced.
///
/// Only observed colors are enumerated: sources are input colors absent from
/// the output, destinations are output colors absent from the input.
pub(super) fn replacements(example: &Example) -> Vec<Candidate> {
    let (input, output) = (example.input.colors(), example.output.colors());
    let sources = input.difference(output);
    let destinations = output.difference(input);

    sources
        .iter()
        .flat_map(|from| destinations.iter().map(move |to| Candidate::ColorReplace { from, to }))
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
    fn shifts_cover_offsets_one_through_nine() {
        let offsets: Vec<_> = shifts()
            .into_iter()
            .map(|c| match c {
                Candidate::ColorShift { offset } => offset,
                other => panic!("unexpected {other}"),
            })
            .collect();
        assert_eq!(offsets, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn replacements_pair_vanished_with_introduced_colors() {
        let ex = example(&[&[0, 1, 2]], &[&[7, 1, 8]]);
        assert_eq!(
            replacements(&ex),
            vec![
                Candidate::ColorReplace { from: 0, to: 7 },
                Candidate::ColorReplace { from: 0, to: 8 },
                Candidate::ColorReplace { from: 2, to: 7 },
                Candidate::ColorReplace { from: 2, to: 8 },
            ]
        );
    }

    #[test]
    fn no_replacements_when_palettes_agree() {
        let ex = example(&[&[1, 2]], &[&[2, 1]]);
        assert!(replacements(&ex).is_empty());
    }
}
