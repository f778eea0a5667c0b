use thiserror::Error;

use crate::Color;

use super::{MAX_CELLS, Shape};

/// Errors raised when constructing a grid from raw rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidGridError {
    #[error("grid has no rows")]
    NoRows,

    #[error("grid has no columns")]
    NoColumns,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) has color {value}, outside the palette")]
    ColorOutOfRange { row: usize, col: usize, value: Color },
}

/// Errors raised by parameterized grid operations.
///
/// Each variant describes a parameter that would otherwise produce an empty,
/// out-of-bounds, or out-of-palette grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridOpError {
    #[error("factor must be positive")]
    ZeroFactor,

    #[error("operation would produce an empty grid")]
    EmptyShape,

    #[error("operation would produce more than {max} cells", max = MAX_CELLS)]
    TooLarge,

    #[error("cannot combine a {left} grid with a {right} grid")]
    ShapeMismatch { left: Shape, right: Shape },

    #[error("color {value} is outside the palette")]
    ColorOutOfRange { value: Color },

    #[error("block ({block_row}, {block_col}) is outside a {row_reps}x{col_reps} tiling")]
    BlockOutOfRange {
        block_row: usize,
        block_col: usize,
        row_reps: usize,
        col_reps: usize,
    },

    #[error("cannot crop a border of width {width} from a {shape} grid")]
    CropTooLarge { width: usize, shape: Shape },

    #[error("offset {offset} must be less than stride {stride}")]
    OffsetOutOfRange { offset: usize, stride: usize },

    #[error("region at ({row}, {col}) of shape {region} exceeds a {shape} grid")]
    RegionOutOfRange {
        row: usize,
        col: usize,
        region: Shape,
        shape: Shape,
    },
}
