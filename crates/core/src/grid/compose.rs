use crate::{BACKGROUND, Color, PALETTE_SIZE};

use super::{Grid, GridOpError, Shape};

impl Grid {
    /// Tiles the grid into a `row_reps x col_reps` arrangement of blocks.
    ///
    /// Each block at `(block_row, block_col)` listed in `occupied` is a copy of
    /// the grid; every other block is filled with the background color.
    ///
    /// # Errors
    ///
    /// Returns an error if either repetition count is zero, the result would be
    /// too large, or an occupied block lies outside the arrangement.
    pub fn tile(
        &self,
        row_reps: usize,
        col_reps: usize,
        occupied: &[(usize, usize)],
    ) -> Result<Grid, GridOpError> {
        if row_reps == 0 || col_reps == 0 {
            return Err(GridOpError::ZeroFactor);
        }
        let Shape { rows, cols } = self.shape;
        let out = Shape::checked(rows.checked_mul(row_reps), cols.checked_mul(col_reps))?;

        let mut mask = vec![false; row_reps * col_reps];
        for &(block_row, block_col) in occupied {
            if block_row >= row_reps || block_col >= col_reps {
                return Err(GridOpError::BlockOutOfRange {
                    block_row,
                    block_col,
                    row_reps,
                    col_reps,
                });
            }
            mask[block_row * col_reps + block_col] = true;
        }

        Ok(Grid::from_fn(out, |r, c| {
            if mask[(r / rows) * col_reps + c / cols] {
                self.at(r % rows, c % cols)
            } else {
                BACKGROUND
            }
        }))
    }

    /// Scales the grid up by replicating each cell into a `factor x factor` block.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is zero or the result would be too large.
    pub fn upscale(&self, factor: usize) -> Result<Grid, GridOpError> {
        if factor == 0 {
            return Err(GridOpError::ZeroFactor);
        }
        let out = Shape::checked(
            self.shape.rows.checked_mul(factor),
            self.shape.cols.checked_mul(factor),
        )?;
        Ok(Grid::from_fn(out, |r, c| self.at(r / factor, c / factor)))
    }

    /// Surrounds the grid with a border `width` cells wide of a single color.
    ///
    /// # Errors
    ///
    /// Returns an error if `color` is outside the palette or the result would
    /// be too large.
    pub fn pad(&self, width: usize, color: Color) -> Result<Grid, GridOpError> {
        if color >= PALETTE_SIZE {
            return Err(GridOpError::ColorOutOfRange { value: color });
        }
        let Shape { rows, cols } = self.shape;
        let margin = width.checked_mul(2);
        let out = Shape::checked(
            margin.and_then(|m| rows.checked_add(m)),
            margin.and_then(|m| cols.checked_add(m)),
        )?;
        Ok(Grid::from_fn(out, |r, c| {
            let inside = (width..width + rows).contains(&r) && (width..width + cols).contains(&c);
            if inside {
                self.at(r - width, c - width)
            } else {
                color
            }
        }))
    }

    /// Removes a border `width` cells wide from every side.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing would remain.
    pub fn crop(&self, width: usize) -> Result<Grid, GridOpError> {
        let Shape { rows, cols } = self.shape;
        let margin = width.saturating_mul(2);
        if margin >= rows || margin >= cols {
            return Err(GridOpError::CropTooLarge {
                width,
                shape: self.shape,
            });
        }
        self.block(width, width, Shape::new(rows - margin, cols - margin))
    }

    /// Keeps every `stride`-th row and column, starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stride` is zero, `offset` is not less than
    /// `stride`, or the offset skips past every row or column.
    pub fn subsample(&self, stride: usize, offset: usize) -> Result<Grid, GridOpError> {
        if stride == 0 {
            return Err(GridOpError::ZeroFactor);
        }
        if offset >= stride {
            return Err(GridOpError::OffsetOutOfRange { offset, stride });
        }
        let Shape { rows, cols } = self.shape;
        if offset >= rows || offset >= cols {
            return Err(GridOpError::EmptyShape);
        }
        let out = Shape::new((rows - offset).div_ceil(stride), (cols - offset).div_ceil(stride));
        Ok(Grid::from_fn(out, |r, c| {
            self.at(offset + r * stride, offset + c * stride)
        }))
    }

    /// Extracts the rectangular region of shape `region` whose top-left cell
    /// is `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is empty or extends past the grid.
    pub fn block(&self, row: usize, col: usize, region: Shape) -> Result<Grid, GridOpError> {
        if region.area() == 0 {
            return Err(GridOpError::EmptyShape);
        }
        let past_rows = row.checked_add(region.rows).is_none_or(|end| end > self.shape.rows);
        let past_cols = col.checked_add(region.cols).is_none_or(|end| end > self.shape.cols);
        if past_rows || past_cols {
            return Err(GridOpError::RegionOutOfRange {
                row,
                col,
                region,
                shape: self.shape,
            });
        }
        Ok(Grid::from_fn(region, |r, c| self.at(row + r, col + c)))
    }

    /// Extracts row `index` as a single-row grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn row(&self, index: usize) -> Result<Grid, GridOpError> {
        self.block(index, 0, Shape::new(1, self.shape.cols))
    }

    /// Extracts column `index` as a single-column grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn column(&self, index: usize) -> Result<Grid, GridOpError> {
        self.block(0, index, Shape::new(self.shape.rows, 1))
    }

    /// Combines two grids of the same shape cell by cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ or `f` produces a color outside
    /// the palette.
    pub fn combine(
        &self,
        other: &Grid,
        mut f: impl FnMut(Color, Color) -> Color,
    ) -> Result<Grid, GridOpError> {
        if self.shape != other.shape {
            return Err(GridOpError::ShapeMismatch {
                left: self.shape,
                right: other.shape,
            });
        }
        let mut cells = Vec::with_capacity(self.cells.len());
        for (&a, &b) in self.cells.iter().zip(&other.cells) {
            let value = f(a, b);
            if value >= PALETTE_SIZE {
                return Err(GridOpError::ColorOutOfRange { value });
            }
            cells.push(value);
        }
        Ok(Grid {
            shape: self.shape,
            cells,
        })
    }

    /// Paints the outermost ring of cells with `color`, keeping the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if `color` is outside the palette.
    pub fn outline(&self, color: Color) -> Result<Grid, GridOpError> {
        if color >= PALETTE_SIZE {
            return Err(GridOpError::ColorOutOfRange { value: color });
        }
        let Shape { rows, cols } = self.shape;
        Ok(Grid::from_fn(self.shape, |r, c| {
            if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                color
            } else {
                self.at(r, c)
            }
        }))
    }
}
