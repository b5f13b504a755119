//! Layer names and the declarative layer grid.

use crate::models::cell::Cell;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of cells in each of the three main rows.
pub const ROW_WIDTH: usize = 10;

/// Number of main rows (top, home, bottom).
pub const MAIN_ROWS: usize = 3;

/// Number of thumb keys.
pub const THUMB_COUNT: usize = 6;

/// The ten layers every generated document defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerName {
    /// Alphas with home-row mods
    Base,
    /// QWERTY alternative base
    Extra,
    /// Alphas with no dual-role keys
    Tap,
    /// Cursor navigation and clipboard
    Nav,
    /// Mouse movement and buttons
    Mouse,
    /// Clipboard and mouse buttons under the bottom corners
    Button,
    /// Media transport
    Media,
    /// Number pad
    Num,
    /// Shifted symbols
    Sym,
    /// Function keys
    Fun,
}

/// Which part of a layer changes position when thumbs are flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipScope {
    /// The two thumb triples exchange hands.
    ThumbHalves,
    /// The layer is identical in both orientations.
    Fixed,
}

impl LayerName {
    /// Document order.
    pub const ALL: [Self; 10] = [
        Self::Base,
        Self::Extra,
        Self::Tap,
        Self::Nav,
        Self::Mouse,
        Self::Button,
        Self::Media,
        Self::Num,
        Self::Sym,
        Self::Fun,
    ];

    /// Identifier used in `deflayer`, `layer-toggle` and `layer-switch`.
    pub const fn ident(self) -> &'static str {
        match self {
            Self::Base => "U_BASE",
            Self::Extra => "U_EXTRA",
            Self::Tap => "U_TAP",
            Self::Nav => "U_NAV",
            Self::Mouse => "U_MOUSE",
            Self::Button => "U_BUTTON",
            Self::Media => "U_MEDIA",
            Self::Num => "U_NUM",
            Self::Sym => "U_SYM",
            Self::Fun => "U_FUN",
        }
    }

    /// Flip-sensitive segment of this layer.
    ///
    /// BUTTON keeps its thumb row in place: the row is already hand-mirrored.
    pub const fn flip_scope(self) -> FlipScope {
        match self {
            Self::Button => FlipScope::Fixed,
            _ => FlipScope::ThumbHalves,
        }
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl Serialize for LayerName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.ident())
    }
}

/// Exchanges the two halves of an even-length segment.
///
/// Applying it twice restores the original order.
pub fn mirror_halves<T>(segment: &mut [T]) {
    debug_assert!(segment.len() % 2 == 0, "segment must split evenly");
    let half = segment.len() / 2;
    segment.rotate_left(half);
}

/// One complete layer: three rows of ten cells plus six thumb cells.
///
/// The grid is always stored in its unflipped orientation by the builders
/// and flipped afterwards with [`LayerSpec::flipped`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerSpec {
    /// Layer identity
    pub name: LayerName,
    /// Top, home and bottom rows, left to right
    pub rows: [[Cell; ROW_WIDTH]; MAIN_ROWS],
    /// Thumb keys, left to right
    pub thumbs: [Cell; THUMB_COUNT],
}

impl LayerSpec {
    /// Creates a layer from its rows and thumbs.
    pub const fn new(
        name: LayerName,
        rows: [[Cell; ROW_WIDTH]; MAIN_ROWS],
        thumbs: [Cell; THUMB_COUNT],
    ) -> Self {
        Self { name, rows, thumbs }
    }

    /// Returns the flip-sensitive cells of this layer, if any.
    pub fn flip_segment_mut(&mut self) -> Option<&mut [Cell]> {
        match self.name.flip_scope() {
            FlipScope::ThumbHalves => Some(&mut self.thumbs[..]),
            FlipScope::Fixed => None,
        }
    }

    /// Mirrors the flip-sensitive segment in place.
    pub fn apply_flip(&mut self) {
        if let Some(segment) = self.flip_segment_mut() {
            mirror_halves(segment);
        }
    }

    /// Returns this layer in the requested thumb orientation.
    #[must_use]
    pub fn flipped(mut self, flip: bool) -> Self {
        if flip {
            self.apply_flip();
        }
        self
    }

    /// Iterates every cell, rows first then thumbs.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten().chain(self.thumbs.iter())
    }
}
