use gridwise_core::{Example, Shape};

use crate::Candidate;

/// Proposes adding or removing a uniform border.
///
/// The width is read off the shape difference. When padding, the border
/// color is read off the output's top-left corner.
pub(super) fn generate(example: &Example) -> Vec<Candidate> {
    let (input, output) = (example.input.shape(), example.output.shape());

    if let Some(width) = border_width(input, output) {
        let Some(color) = example.output.get(0, 0) else {
            return Vec::new();
        };
        return vec![Candidate::Pad { width, color }];
    }
    if let Some(width) = border_width(output, input) {
        return vec![Candidate::Crop { width }];
    }
    Vec::new()
}

/// Returns the width of the border that grows `inner` into `outer`, if the
/// growth is equal, even, and positive on both axes.
pub(crate) fn border_width(inner: Shape, outer: Shape) -> Option<usize> {
    let rows = outer.rows.checked_sub(inner.rows)?;
    let cols = outer.cols.checked_sub(inner.cols)?;
    (rows == cols && rows > 0 && rows % 2 == 0).then_some(rows / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    use gridwise_core::Grid;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn pads_with_the_corner_color() {
        let ex = Example::new(grid(&[&[1]]), grid(&[&[6, 6, 6], &[6, 1, 6], &[6, 6, 6]]));
        assert_eq!(generate(&ex), vec![Candidate::Pad { width: 1, color: 6 }]);
    }

    #[test]
    fn crops_by_half_the_shape_difference() {
        let input = Grid::filled(Shape::new(6, 6), 5).unwrap();
        let ex = Example::new(input, grid(&[&[5, 5], &[5, 5]]));
        assert_eq!(generate(&ex), vec![Candidate::Crop { width: 2 }]);
    }

    #[test]
    fn border_width_requires_even_equal_growth() {
        assert_eq!(border_width(Shape::new(2, 2), Shape::new(4, 4)), Some(1));
        assert_eq!(border_width(Shape::new(2, 2), Shape::new(3, 3)), None);
        assert_eq!(border_width(Shape::new(2, 2), Shape::new(4, 6)), None);
        assert_eq!(border_width(Shape::new(2, 2), Shape::new(2, 2)), None);
        assert_eq!(border_width(Shape::new(4, 4), Shape::new(2, 2)), None);
    }
}
