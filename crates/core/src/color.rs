use std::fmt;

/// A palette color.
///
/// Valid colors lie in `0..PALETTE_SIZE`. Grids enforce this at construction.
pub type Color = u8;

/// Number of colors in the palette.
pub const PALETTE_SIZE: u8 = 10;

/// The conventional background color.
pub const BACKGROUND: Color = 0;

/// A set of palette colors stored as a bitmask.
///
/// Iteration always yields colors in ascending order, which keeps any
/// enumeration driven by a `ColorSet` deterministic.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u16);

impl ColorSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns a set containing every palette color.
    #[must_use]
    pub fn full() -> Self {
        Self((1 << PALETTE_SIZE) - 1)
    }

    /// Adds a color to the set.
    ///
    /// Colors outside the palette are ignored.
    pub fn insert(&mut self, color: Color) {
        if color < PALETTE_SIZE {
            self.0 |= 1 << color;
        }
    }

    /// Returns true if the set contains `color`.
    #[must_use]
    pub fn contains(self, color: Color) -> bool {
        color < PALETTE_SIZE && self.0 & (1 << color) != 0
    }

    /// Returns the colors in `self` that are not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the number of colors in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the colors in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        (0..PALETTE_SIZE).filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl fmt::Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
