//! The candidate library: transformation families in priority order.
//!
//! A [`Family`] is a generator of concrete candidates of one structural kind.
//! Every family proposes its candidates from the **first** training example
//! only; whether a candidate explains the whole task is decided later by the
//! validator. Families never look at later examples while choosing
//! parameters.
//!
//! # Priority
//!
//! [`Family::ALL`] lists the families cheapest-serialization-first. The
//! searcher walks this order and stops at the first validated candidate, so
//! when two families both explain a task the one listed earlier wins.
//!
//! | # | Family          | Parameters read off the first example          |
//! |---|-----------------|------------------------------------------------|
//! | 1 | `Identity`      | none                                           |
//! | 2 | `Geometric`     | none; ops whose output shape fits              |
//! | 3 | `ColorShift`    | none; every offset `1..10`                     |
//! | 4 | `ColorReplace`  | vanished input colors x new output colors      |
//! | 5 | `ColorMap`      | the induced map                                |
//! | 6 | `Scale`         | factor from the shape ratio                    |
//! | 7 | `Tile`          | occupied blocks read back from the output      |
//! | 8 | `Border`        | width from the shape difference, color from a corner |
//! | 9 | `Aggregate`     | none; every reduction                          |
//! | 10 | `Subsample`    | (stride, offset) pairs whose shape fits        |
//! | 11 | `Edge`         | edges whose shape fits                         |
//! | 12 | `Overlay`      | none; max or sum with either flip              |
//! | 13 | `Outline`      | ring color from the output's top-left corner   |
//! | 14 | `Fill`         | reductions that give the output's color        |

mod aggregate;
mod border;
mod color;
mod extract;
mod geometric;
mod paint;
mod resize;
mod symmetry;

use std::fmt;

use gridwise_core::Example;

use crate::{Candidate, InductionError, inducer};

pub(crate) use border::border_width;

/// A generator of candidates of one structural kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Family {
    Identity,
    Geometric,
    ColorShift,
    ColorReplace,
    ColorMap,
    Scale,
    Tile,
    Border,
    Aggregate,
    Subsample,
    Edge,
    Overlay,
    Outline,
    Fill,
}

impl Family {
    /// Every family, in search priority order.
    pub const ALL: [Family; 14] = [
        Family::Identity,
        Family::Geometric,
        Family::ColorShift,
        Family::ColorReplace,
        Family::ColorMap,
        Family::Scale,
        Family::Tile,
        Family::Border,
        Family::Aggregate,
        Family::Subsample,
        Family::Edge,
        Family::Overlay,
        Family::Outline,
        Family::Fill,
    ];

    /// Returns the family's 1-based position in [`Family::ALL`].
    #[must_use]
    pub fn priority(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Geometric => "geometric",
            Self::ColorShift => "color_shift",
            Self::ColorReplace => "color_replace",
            Self::ColorMap => "color_map",
            Self::Scale => "scale",
            Self::Tile => "tile",
            Self::Border => "border",
            Self::Aggregate => "aggregate",
            Self::Subsample => "subsample",
            Self::Edge => "edge",
            Self::Overlay => "overlay",
            Self::Outline => "outline",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Proposes the family's candidates from one example, in a fixed order.
///
/// Families whose shape requirements the example does not meet propose
/// nothing; callers normally consult [`is_compatible`](crate::is_compatible)
/// first and skip them entirely.
///
/// # Errors
///
/// Only [`Family::ColorMap`] can fail, when induction finds the example
/// inconsistent with any color map.
pub fn generate(family: Family, example: &Example) -> Result<Vec<Candidate>, InductionError> {
    let candidates = match family {
        Family::Identity => vec![Candidate::Identity],
        Family::Geometric => geometric::generate(example),
        Family::ColorShift => color::shifts(),
        Family::ColorReplace => color::replacements(example),
        Family::ColorMap => vec![Candidate::ColorMap(inducer::induce(example)?)],
        Family::Scale => resize::scale(example),
        Family::Tile => resize::tile(example),
        Family::Border => border::generate(example),
        Family::Aggregate => aggregate::generate(),
        Family::Subsample => extract::subsample(example),
        Family::Edge => extract::edges(example),
        Family::Overlay => symmetry::overlays(),
        Family::Outline => paint::outlines(example),
        Family::Fill => paint::fills(example),
    };
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_follows_declaration_order() {
        for (i, family) in Family::ALL.iter().enumerate() {
            assert_eq!(family.priority(), i + 1);
        }
        assert!(Family::Identity < Family::Geometric);
        assert!(Family::Scale < Family::Tile);
    }

    #[test]
    fn every_generated_candidate_belongs_to_its_family() {
        use gridwise_core::Grid;

        let square = Example::new(
            Grid::new(vec![vec![1, 2], vec![3, 4]]).unwrap(),
            Grid::new(vec![vec![2, 3], vec![4, 5]]).unwrap(),
        );
        for family in Family::ALL {
            if let Ok(candidates) = generate(family, &square) {
                for candidate in candidates {
                    assert_eq!(candidate.family(), family, "{candidate}");
                }
            }
        }
    }
}
