use std::fmt;

use thiserror::Error;

use gridwise_core::{BACKGROUND, Color, Geometry, Grid, GridOpError, PALETTE_SIZE, Shape};

use crate::{ColorMap, Family};

/// A concrete, parameter-bound grid transformation hypothesis.
///
/// Candidates are pure: [`Candidate::apply`] never mutates its input and
/// always returns a new grid or an [`ExecutionFault`].
///
/// Every candidate renders a compact canonical program text through
/// [`Display`](fmt::Display). Its byte length is the serialized-size estimate
/// the score is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Candidate {
    /// Returns the input unchanged.
    Identity,

    /// A rotation, flip, or transpose.
    Geometric(Geometry),

    /// Adds `offset` to every color, modulo the palette size.
    ColorShift { offset: Color },

    /// Replaces one color with another.
    ColorReplace { from: Color, to: Color },

    /// Applies an induced color map cell-wise.
    ColorMap(ColorMap),

    /// Replicates every cell into a `factor x factor` block.
    Scale { factor: usize },

    /// Tiles the input into blocks, some of them background.
    Tile(TileLayout),

    /// Adds a uniform border.
    Pad { width: usize, color: Color },

    /// Removes a uniform border.
    Crop { width: usize },

    /// Collapses the grid to a single cell.
    Aggregate(Aggregate),

    /// Keeps every `stride`-th row and column, starting at `offset`.
    Subsample { stride: usize, offset: usize },

    /// Extracts one edge row or column.
    Edge(Edge),

    /// Merges the grid with its own mirror image cell by cell.
    Overlay { mirror: Geometry, combine: Combine },

    /// Paints the outermost ring, keeping the shape.
    Outline(Paint),

    /// Fills the whole grid with the color an aggregate reduces it to.
    Fill(Aggregate),
}

/// Errors raised while applying a candidate to a grid.
///
/// The validator treats every fault as "does not match".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionFault {
    #[error(transparent)]
    Grid(#[from] GridOpError),

    #[error("{aggregate} produced {value}, outside the palette")]
    ValueOutOfPalette { aggregate: Aggregate, value: usize },
}

/// Block arrangement for [`Candidate::Tile`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayout {
    pub row_reps: usize,
    pub col_reps: usize,

    /// Occupied `(block_row, block_col)` coordinates in row-major order.
    pub occupied: Vec<(usize, usize)>,
}

/// How [`Candidate::Overlay`] merges two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Combine {
    Max,
    /// Faults when the sum leaves the palette.
    Sum,
}

impl Combine {
    pub const ALL: [Combine; 2] = [Combine::Max, Combine::Sum];

    fn merge(self, a: Color, b: Color) -> Color {
        match self {
            Self::Max => a.max(b),
            Self::Sum => a + b,
        }
    }
}

/// The color [`Candidate::Outline`] paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Paint {
    Color(Color),
    /// Whatever color the input's top-left cell has.
    Corner,
}

/// Whole-grid reductions to a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Aggregate {
    /// The most frequent color; ties go to the color seen first in row-major order.
    MostFrequent,
    /// The least frequent color present; ties go to the color seen first.
    LeastFrequent,
    Max,
    Min,
    CountNonzero,
    CountColors,
    Sum,
    TopLeft,
    BottomRight,
}

impl Aggregate {
    pub const ALL: [Aggregate; 9] = [
        Aggregate::MostFrequent,
        Aggregate::LeastFrequent,
        Aggregate::Max,
        Aggregate::Min,
        Aggregate::CountNonzero,
        Aggregate::CountColors,
        Aggregate::Sum,
        Aggregate::TopLeft,
        Aggregate::BottomRight,
    ];

    /// Reduces the grid to a single value, which may lie outside the palette.
    #[must_use]
    pub fn evaluate(self, grid: &Grid) -> usize {
        let cells = grid.cells();
        match self {
            Self::MostFrequent => first_by_count(grid, |count, best| count > best),
            Self::LeastFrequent => first_by_count(grid, |count, best| count < best),
            Self::Max => cells.iter().copied().max().map_or(0, usize::from),
            Self::Min => cells.iter().copied().min().map_or(0, usize::from),
            Self::CountNonzero => cells.iter().filter(|&&c| c != 0).count(),
            Self::CountColors => grid.colors().len(),
            Self::Sum => cells.iter().map(|&c| usize::from(c)).sum(),
            Self::TopLeft => cells.first().map_or(0, |&c| usize::from(c)),
            Self::BottomRight => cells.last().map_or(0, |&c| usize::from(c)),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::MostFrequent => "most_common",
            Self::LeastFrequent => "least_common",
            Self::Max => "max",
            Self::Min => "min",
            Self::CountNonzero => "count_nonzero",
            Self::CountColors => "count_colors",
            Self::Sum => "sum",
            Self::TopLeft => "top_left",
            Self::BottomRight => "bottom_right",
        }
    }

    /// Reduces the grid to a palette color.
    fn color(self, grid: &Grid) -> Result<Color, ExecutionFault> {
        let value = self.evaluate(grid);
        Color::try_from(value)
            .ok()
            .filter(|&c| c < PALETTE_SIZE)
            .ok_or(ExecutionFault::ValueOutOfPalette {
                aggregate: self,
                value,
            })
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scans cells in row-major order and keeps the first color whose count
/// beats the current best under `better`.
fn first_by_count(grid: &Grid, better: impl Fn(usize, usize) -> bool) -> usize {
    let counts = grid.color_counts();
    let mut cells = grid.cells().iter().map(|&c| usize::from(c));
    let Some(mut best) = cells.next() else {
        return 0;
    };
    for color in cells {
        if better(counts[color], counts[best]) {
            best = color;
        }
    }
    best
}

/// An edge row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Edge {
    FirstRow,
    LastRow,
    FirstColumn,
    LastColumn,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::FirstRow, Edge::LastRow, Edge::FirstColumn, Edge::LastColumn];

    /// Returns the shape of this edge of a grid of `shape`.
    #[must_use]
    pub fn output_shape(self, shape: Shape) -> Shape {
        match self {
            Self::FirstRow | Self::LastRow => Shape::new(1, shape.cols),
            Self::FirstColumn | Self::LastColumn => Shape::new(shape.rows, 1),
        }
    }
}

impl Candidate {
    /// Returns the family this candidate belongs to.
    #[must_use]
    pub fn family(&self) -> Family {
        match self {
            Self::Identity => Family::Identity,
            Self::Geometric(_) => Family::Geometric,
            Self::ColorShift { .. } => Family::ColorShift,
            Self::ColorReplace { .. } => Family::ColorReplace,
            Self::ColorMap(_) => Family::ColorMap,
            Self::Scale { .. } => Family::Scale,
            Self::Tile(_) => Family::Tile,
            Self::Pad { .. } | Self::Crop { .. } => Family::Border,
            Self::Aggregate(_) => Family::Aggregate,
            Self::Subsample { .. } => Family::Subsample,
            Self::Edge(_) => Family::Edge,
            Self::Overlay { .. } => Family::Overlay,
            Self::Outline(_) => Family::Outline,
            Self::Fill(_) => Family::Fill,
        }
    }

    /// Applies the candidate to a grid.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutionFault`] if the candidate's parameters do not fit
    /// the grid, or if the result would contain a color outside the palette.
    pub fn apply(&self, grid: &Grid) -> Result<Grid, ExecutionFault> {
        let out = match self {
            Self::Identity => grid.clone(),
            Self::Geometric(op) => grid.apply(*op),
            Self::ColorShift { offset } => {
                let offset = offset % PALETTE_SIZE;
                grid.map_colors(|c| (c + offset) % PALETTE_SIZE)?
            }
            Self::ColorReplace { from, to } => {
                grid.map_colors(|c| if c == *from { *to } else { c })?
            }
            Self::ColorMap(map) => grid.map_colors(|c| map.get(c).unwrap_or(c))?,
            Self::Scale { factor } => grid.upscale(*factor)?,
            Self::Tile(layout) => grid.tile(layout.row_reps, layout.col_reps, &layout.occupied)?,
            Self::Pad { width, color } => grid.pad(*width, *color)?,
            Self::Crop { width } => grid.crop(*width)?,
            Self::Aggregate(aggregate) => Grid::filled(Shape::new(1, 1), aggregate.color(grid)?)?,
            Self::Subsample { stride, offset } => grid.subsample(*stride, *offset)?,
            Self::Edge(edge) => {
                let Shape { rows, cols } = grid.shape();
                match edge {
                    Edge::FirstRow => grid.row(0)?,
                    Edge::LastRow => grid.row(rows - 1)?,
                    Edge::FirstColumn => grid.column(0)?,
                    Edge::LastColumn => grid.column(cols - 1)?,
                }
            }
            Self::Overlay { mirror, combine } => {
                grid.combine(&grid.apply(*mirror), |a, b| combine.merge(a, b))?
            }
            Self::Outline(paint) => {
                let color = match paint {
                    Paint::Color(color) => *color,
                    Paint::Corner => grid.get(0, 0).unwrap_or(BACKGROUND),
                };
                grid.outline(color)?
            }
            Self::Fill(aggregate) => Grid::filled(grid.shape(), aggregate.color(grid)?)?,
        };
        Ok(out)
    }

    /// Returns the canonical program text.
    #[must_use]
    pub fn program(&self) -> String {
        self.to_string()
    }

    /// Returns the serialized-size estimate in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.program().len()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("g"),
            Self::Geometric(op) => write!(f, "{}(g)", geometry_name(*op)),
            Self::ColorShift { offset } => write!(f, "shift(g,{offset})"),
            Self::ColorReplace { from, to } => write!(f, "replace(g,{from},{to})"),
            Self::ColorMap(map) => write!(f, "map(g,{map})"),
            Self::Scale { factor } => write!(f, "scale(g,{factor})"),
            Self::Tile(layout) => {
                write!(f, "tile(g,{},{},[", layout.row_reps, layout.col_reps)?;
                for (i, (r, c)) in layout.occupied.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "({r},{c})")?;
                }
                f.write_str("])")
            }
            Self::Pad { width, color } => write!(f, "pad(g,{width},{color})"),
            Self::Crop { width } => write!(f, "crop(g,{width})"),
            Self::Aggregate(aggregate) => write!(f, "{aggregate}(g)"),
            Self::Subsample { stride, offset } => write!(f, "subsample(g,{stride},{offset})"),
            Self::Edge(edge) => f.write_str(match edge {
                Edge::FirstRow => "g[0]",
                Edge::LastRow => "g[-1]",
                Edge::FirstColumn => "col(g,0)",
                Edge::LastColumn => "col(g,-1)",
            }),
            Self::Overlay { mirror, combine } => {
                let merge = match combine {
                    Combine::Max => "max",
                    Combine::Sum => "add",
                };
                write!(f, "{merge}(g,{}(g))", geometry_name(*mirror))
            }
            Self::Outline(Paint::Color(color)) => write!(f, "outline(g,{color})"),
            Self::Outline(Paint::Corner) => f.write_str("outline(g,g[0][0])"),
            Self::Fill(aggregate) => write!(f, "fill(g,{aggregate}(g))"),
        }
    }
}

fn geometry_name(op: Geometry) -> &'static str {
    match op {
        Geometry::Rotate90 => "rot90",
        Geometry::Rotate180 => "rot180",
        Geometry::Rotate270 => "rot270",
        Geometry::FlipHorizontal => "fliplr",
        Geometry::FlipVertical => "flipud",
        Geometry::Transpose => "transpose",
    }
}
