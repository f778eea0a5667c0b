//! Color-map induction from a single example.
//!
//! The inducer scans the input and output of one example in row-major order
//! and builds a partial function from input colors to output colors. The
//! first cell that contradicts an earlier assignment ends the scan with an
//! [`InductionError::Conflict`]; no partial map is ever returned.
//!
//! The scan is a single linear pass and yields at most one map. A successful
//! map only explains the example it was induced from; the validator decides
//! whether it explains the rest of the task.

use std::fmt;

use thiserror::Error;

use gridwise_core::{Color, Example, PALETTE_SIZE, Shape};

/// A partial function from source color to destination color.
///
/// Colors without an entry map to themselves when the map is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMap {
    entries: [Option<Color>; PALETTE_SIZE as usize],
}

impl ColorMap {
    /// Returns the destination for `color`, if one was induced.
    #[must_use]
    pub fn get(&self, color: Color) -> Option<Color> {
        self.entries.get(usize::from(color)).copied().flatten()
    }

    /// Iterates over `(source, destination)` pairs in ascending source order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
        (0..PALETTE_SIZE).filter_map(|c| self.get(c).map(|d| (c, d)))
    }

    /// Returns the number of mapped colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Color, Color)> for ColorMap {
    /// Builds a map from pairs; later pairs overwrite earlier ones and
    /// sources outside the palette are ignored.
    fn from_iter<I: IntoIterator<Item = (Color, Color)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (source, destination) in iter {
            if let Some(slot) = map.entries.get_mut(usize::from(source)) {
                *slot = Some(destination);
            }
        }
        map
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (c, d)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}:{d}")?;
        }
        f.write_str("}")
    }
}

/// Reasons color-map induction can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InductionError {
    #[error("input shape {input} differs from output shape {output}")]
    ShapeMismatch { input: Shape, output: Shape },

    #[error("cell ({row}, {col}) maps color {color} to {found}, but it already maps to {mapped}")]
    Conflict {
        row: usize,
        col: usize,
        color: Color,
        mapped: Color,
        found: Color,
    },
}

/// Induces a color map from one example.
///
/// # Errors
///
/// Returns an error if the input and output shapes differ, or if some input
/// color must map to two different output colors.
pub fn induce(example: &Example) -> Result<ColorMap, InductionError> {
    let (input, output) = (&example.input, &example.output);
    if input.shape() != output.shape() {
        return Err(InductionError::ShapeMismatch {
            input: input.shape(),
            output: output.shape(),
        });
    }

    let cols = input.shape().cols;
    let mut map = ColorMap::default();
    for (i, (&color, &found)) in input.cells().iter().zip(output.cells()).enumerate() {
        let slot = &mut map.entries[usize::from(color)];
        match *slot {
            None => *slot = Some(found),
            Some(mapped) if mapped != found => {
                return Err(InductionError::Conflict {
                    row: i / cols,
                    col: i % cols,
                    color,
                    mapped,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(map)
}
