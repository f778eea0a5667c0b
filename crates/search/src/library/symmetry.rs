use gridwise_core::Geometry;

use crate::{Candidate, Combine};

const MIRRORS: [Geometry; 2] = [Geometry::FlipHorizontal, Geometry::FlipVertical];

/// Proposes merging the grid with each of its flips, max before sum.
pub(super) fn overlays() -> Vec<Candidate> {
    Combine::ALL
        .into_iter()
        .flat_map(|combine| {
            MIRRORS
                .into_iter()
                .map(move |mirror| Candidate::Overlay { mirror, combine })
        })
        .collect()
}
