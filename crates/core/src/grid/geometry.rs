use std::fmt;

use super::{Grid, Shape};

/// A rigid transformation of a grid.
///
/// Rotations are clockwise: [`Geometry::Rotate90`] turns `[[1, 2], [3, 4]]`
/// into `[[3, 1], [4, 2]]`. [`Geometry::Rotate270`] is therefore the
/// counter-clockwise quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Geometry {
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror left to right (reverse each row).
    FlipHorizontal,
    /// Mirror top to bottom (reverse the row order).
    FlipVertical,
    /// Swap rows and columns about the main diagonal.
    Transpose,
}

impl Geometry {
    /// Every geometric operation, in search order.
    pub const ALL: [Geometry; 6] = [
        Geometry::Rotate90,
        Geometry::Rotate180,
        Geometry::Rotate270,
        Geometry::FlipHorizontal,
        Geometry::FlipVertical,
        Geometry::Transpose,
    ];

    /// Returns the shape this operation produces from an input of `shape`.
    #[must_use]
    pub fn output_shape(self, shape: Shape) -> Shape {
        if self.swaps_axes() {
            shape.transposed()
        } else {
            shape
        }
    }

    /// Returns true if the operation exchanges the row and column counts.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270 | Self::Transpose)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rotate90 => "rotate_90",
            Self::Rotate180 => "rotate_180",
            Self::Rotate270 => "rotate_270",
            Self::FlipHorizontal => "flip_horizontal",
            Self::FlipVertical => "flip_vertical",
            Self::Transpose => "transpose",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Grid {
    /// Applies a geometric operation.
    #[must_use]
    pub fn apply(&self, op: Geometry) -> Grid {
        let Shape { rows, cols } = self.shape;
        let out = op.output_shape(self.shape);
        match op {
            Geometry::Rotate90 => Grid::from_fn(out, |r, c| self.at(rows - 1 - c, r)),
            Geometry::Rotate180 => Grid::from_fn(out, |r, c| self.at(rows - 1 - r, cols - 1 - c)),
            Geometry::Rotate270 => Grid::from_fn(out, |r, c| self.at(c, cols - 1 - r)),
            Geometry::FlipHorizontal => Grid::from_fn(out, |r, c| self.at(r, cols - 1 - c)),
            Geometry::FlipVertical => Grid::from_fn(out, |r, c| self.at(rows - 1 - r, c)),
            Geometry::Transpose => Grid::from_fn(out, |r, c| self.at(c, r)),
        }
    }

    /// Rotates a quarter turn clockwise.
    #[must_use]
    pub fn rotate_90(&self) -> Grid {
        self.apply(Geometry::Rotate90)
    }

    #[must_use]
    pub fn rotate_180(&self) -> Grid {
        self.apply(Geometry::Rotate180)
    }

    /// Rotates a quarter turn counter-clockwise.
    #[must_use]
    pub fn rotate_270(&self) -> Grid {
        self.apply(Geometry::Rotate270)
    }

    #[must_use]
    pub fn flip_horizontal(&self) -> Grid {
        self.apply(Geometry::FlipHorizontal)
    }

    #[must_use]
    pub fn flip_vertical(&self) -> Grid {
        self.apply(Geometry::FlipVertical)
    }

    #[must_use]
    pub fn transpose(&self) -> Grid {
        self.apply(Geometry::Transpose)
    }
}
