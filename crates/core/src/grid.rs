//! The grid value type and its shape semantics.
//!
//! A [`Grid`] is a rectangular matrix of palette colors with at least one row
//! and one column. Construction validates the rows once; afterward a grid is
//! immutable and every operation returns a new grid.
//!
//! # Operations
//!
//! - [`geometry`](Grid::apply) — rotations, flips, and transpose, which never fail
//! - [`tile`](Grid::tile), [`upscale`](Grid::upscale) — enlarge by block replication
//! - [`pad`](Grid::pad), [`crop`](Grid::crop) — add or remove a uniform border
//! - [`subsample`](Grid::subsample), [`row`](Grid::row), [`column`](Grid::column),
//!   [`block`](Grid::block) — extract a part of the grid
//!
//! Parameterized operations return [`GridOpError`] instead of producing an
//! invalid grid.

mod compose;
mod error;
mod geometry;

use std::fmt;

pub use error::{GridOpError, InvalidGridError};
pub use geometry::Geometry;

use crate::{Color, ColorSet, PALETTE_SIZE};

/// The most cells any grid operation may produce.
pub const MAX_CELLS: usize = 1 << 20;

/// The dimensions of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the shape with rows and columns swapped.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Returns the number of cells.
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Builds an output shape from dimensions that may have overflowed.
    ///
    /// # Errors
    ///
    /// Returns [`GridOpError::TooLarge`] if either dimension overflowed or the
    /// area exceeds [`MAX_CELLS`], and [`GridOpError::EmptyShape`] if it is zero.
    pub(crate) fn checked(rows: Option<usize>, cols: Option<usize>) -> Result<Self, GridOpError> {
        let (Some(rows), Some(cols)) = (rows, cols) else {
            return Err(GridOpError::TooLarge);
        };
        match rows.checked_mul(cols) {
            Some(0) => Err(GridOpError::EmptyShape),
            Some(area) if area <= MAX_CELLS => Ok(Self::new(rows, cols)),
            _ => Err(GridOpError::TooLarge),
        }
    }

    /// Returns `(row_factor, col_factor)` if `self` is an exact positive
    /// integer multiple of `base` in both dimensions.
    #[must_use]
    pub fn multiple_of(self, base: Shape) -> Option<(usize, usize)> {
        if base.rows == 0 || base.cols == 0 || self.rows == 0 || self.cols == 0 {
            return None;
        }
        if self.rows % base.rows != 0 || self.cols % base.cols != 0 {
            return None;
        }
        Some((self.rows / base.rows, self.cols / base.cols))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// An immutable rectangular matrix of palette colors.
///
/// Two grids are equal iff they have the same shape and every cell is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")
)]
pub struct Grid {
    shape: Shape,
    cells: Vec<Color>,
}

impl Grid {
    /// Creates a grid from rows of colors.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty or ragged,
    /// or any color lies outside the palette.
    pub fn new(rows: Vec<Vec<Color>>) -> Result<Self, InvalidGridError> {
        Self::from_rows(&rows)
    }

    /// Creates a grid from borrowed rows of colors.
    ///
    /// # Errors
    ///
    /// See [`Grid::new`].
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> Result<Self, InvalidGridError> {
        let first = rows.first().ok_or(InvalidGridError::NoRows)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(InvalidGridError::NoColumns);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(InvalidGridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|&c| c >= PALETTE_SIZE) {
                return Err(InvalidGridError::ColorOutOfRange {
                    row,
                    col,
                    value: values[col],
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            shape: Shape::new(rows.len(), cols),
            cells,
        })
    }

    /// Creates a grid of the given shape with every cell set to `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is empty or too large, or the color is
    /// outside the palette.
    pub fn filled(shape: Shape, color: Color) -> Result<Self, GridOpError> {
        let shape = Shape::checked(Some(shape.rows), Some(shape.cols))?;
        if color >= PALETTE_SIZE {
            return Err(GridOpError::ColorOutOfRange { value: color });
        }
        Ok(Self {
            shape,
            cells: vec![color; shape.area()],
        })
    }

    /// Builds a grid cell by cell.
    ///
    /// Callers guarantee a non-empty shape and colors drawn from valid grids.
    pub(crate) fn from_fn(shape: Shape, mut cell: impl FnMut(usize, usize) -> Color) -> Self {
        let mut cells = Vec::with_capacity(shape.area());
        for r in 0..shape.rows {
            for c in 0..shape.cols {
                cells.push(cell(r, c));
            }
        }
        debug_assert!(cells.iter().all(|&c| c < PALETTE_SIZE));
        Self { shape, cells }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the color at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.shape.rows && col < self.shape.cols {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    /// Returns the color at `(row, col)` without a bounds check on the shape.
    pub(crate) fn at(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.shape.cols + col]
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks_exact(self.shape.cols)
    }

    /// Returns the set of colors present in the grid.
    #[must_use]
    pub fn colors(&self) -> ColorSet {
        self.cells.iter().copied().collect()
    }

    /// Returns the number of cells of each palette color.
    #[must_use]
    pub fn color_counts(&self) -> [usize; PALETTE_SIZE as usize] {
        let mut counts = [0; PALETTE_SIZE as usize];
        for &c in &self.cells {
            counts[usize::from(c)] += 1;
        }
        counts
    }

    /// Returns true if every cell has the given color.
    #[must_use]
    pub fn is_filled_with(&self, color: Color) -> bool {
        self.cells.iter().all(|&c| c == color)
    }

    /// Returns a grid of the same shape with `f` applied to every cell.
    ///
    /// # Errors
    ///
    /// Returns an error if `f` produces a color outside the palette.
    pub fn map_colors(&self, mut f: impl FnMut(Color) -> Color) -> Result<Self, GridOpError> {
        let cells = self
            .cells
            .iter()
            .map(|&c| {
                let mapped = f(c);
                if mapped < PALETTE_SIZE {
                    Ok(mapped)
                } else {
                    Err(GridOpError::ColorOutOfRange { value: mapped })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            shape: self.shape,
            cells,
        })
    }
}

impl TryFrom<Vec<Vec<Color>>> for Grid {
    type Error = InvalidGridError;

    fn try_from(rows: Vec<Vec<Color>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Grid> for Vec<Vec<Color>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Color]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_rectangular_rows() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.shape(), Shape::new(2, 3));
        assert_eq!(grid.cells(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.get(1, 2), Some(6));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn new_rejects_empty_grids() {
        assert_eq!(Grid::new(vec![]), Err(InvalidGridError::NoRows));
        assert_eq!(Grid::new(vec![vec![]]), Err(InvalidGridError::NoColumns));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = Grid::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            InvalidGridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn new_rejects_colors_outside_palette() {
        let err = Grid::new(vec![vec![0, 1], vec![10, 2]]).unwrap_err();
        assert_eq!(
            err,
            InvalidGridError::ColorOutOfRange {
                row: 1,
                col: 0,
                value: 10
            }
        );
    }

    #[test]
    fn equality_requires_same_shape() {
        let wide = Grid::new(vec![vec![1, 1]]).unwrap();
        let tall = Grid::new(vec![vec![1], vec![1]]).unwrap();
        assert_ne!(wide, tall);
        assert_eq!(wide.cells(), tall.cells());
    }

    #[test]
    fn color_counts_tally_each_color() {
        let grid = Grid::new(vec![vec![0, 3, 3], vec![3, 0, 9]]).unwrap();
        let counts = grid.color_counts();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[3], 3);
        assert_eq!(counts[9], 1);
        assert_eq!(grid.colors().iter().collect::<Vec<_>>(), vec![0, 3, 9]);
    }

    #[test]
    fn map_colors_rejects_out_of_palette_results() {
        let grid = Grid::new(vec![vec![1, 2]]).unwrap();
        assert_eq!(
            grid.map_colors(|c| c + 1).unwrap(),
            Grid::new(vec![vec![2, 3]]).unwrap()
        );
        assert_eq!(
            grid.map_colors(|c| c + 8),
            Err(GridOpError::ColorOutOfRange { value: 10 })
        );
    }

    #[test]
    fn shape_multiple_of_requires_exact_factors() {
        let base = Shape::new(2, 3);
        assert_eq!(Shape::new(6, 6).multiple_of(base), Some((3, 2)));
        assert_eq!(Shape::new(2, 3).multiple_of(base), Some((1, 1)));
        assert_eq!(Shape::new(5, 6).multiple_of(base), None);
        assert_eq!(Shape::new(0, 6).multiple_of(base), None);
    }

    #[test]
    fn displays_rows_of_digits() {
        let grid = Grid::new(vec![vec![1, 0], vec![0, 7]]).unwrap();
        assert_eq!(grid.to_string(), "10\n07");
    }
}
