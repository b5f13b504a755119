//! Alphabetic layers: BASE, EXTRA and TAP.

use crate::models::layer::{LayerName, LayerSpec, MAIN_ROWS, ROW_WIDTH, THUMB_COUNT};
use crate::models::{Cell, Modifier};
use crate::registry::AlphaLayout;

/// QWERTY keys used by the EXTRA layer regardless of the selected alpha.
pub const EXTRA_KEYS: [&str; 30] = [
    "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", //
    "a", "s", "d", "f", "g", "h", "j", "k", "l", "'", //
    "z", "x", "c", "v", "b", "n", "m", ",", ".", "/",
];

/// Thumb keys of the alpha layers with the overlay each one holds.
const THUMB_LAYERS: [(&str, LayerName); THUMB_COUNT] = [
    ("esc", LayerName::Media),
    ("spc", LayerName::Nav),
    ("tab", LayerName::Mouse),
    ("ent", LayerName::Sym),
    ("bspc", LayerName::Num),
    ("del", LayerName::Fun),
];

/// Base layer: the selected alphas with home-row mods.
pub fn base(alpha: &AlphaLayout) -> LayerSpec {
    LayerSpec::new(LayerName::Base, dual_role_rows(&alpha.keys), layer_thumbs())
}

/// Extra layer: QWERTY with the same dual-role wrapping as BASE.
pub fn extra() -> LayerSpec {
    LayerSpec::new(LayerName::Extra, dual_role_rows(&EXTRA_KEYS), layer_thumbs())
}

/// Tap layer: the selected alphas and thumb keys with no hold behavior.
pub fn tap(alpha: &AlphaLayout) -> LayerSpec {
    let rows = std::array::from_fn(|row| {
        std::array::from_fn(|col| Cell::key(alpha.key(row * ROW_WIDTH + col)))
    });
    let thumbs = THUMB_LAYERS.map(|(key, _)| Cell::key(key));
    LayerSpec::new(LayerName::Tap, rows, thumbs)
}

/// Wraps 30 alpha keys with the fixed dual-role structure.
///
/// Positions 10-13 and 16-19 hold modifiers, 21 and 28 hold `ralt`, and the
/// outer corners 20 and 29 hold the BUTTON layer. The structure depends only
/// on position, never on which key sits there.
pub fn dual_role_rows<S: AsRef<str>>(keys: &[S]) -> [[Cell; ROW_WIDTH]; MAIN_ROWS] {
    let key = move |position: usize| keys[position].as_ref();

    let top = std::array::from_fn(|col| Cell::key(key(col)));
    let home = std::array::from_fn(|col| {
        let k = key(ROW_WIDTH + col);
        match col {
            0..=3 => Cell::mod_tap(k, Modifier::LEFT_HOME[col]),
            6..=9 => Cell::mod_tap(k, Modifier::RIGHT_HOME[col - 6]),
            _ => Cell::key(k),
        }
    });
    let bottom = std::array::from_fn(|col| {
        let k = key(2 * ROW_WIDTH + col);
        match col {
            0 | 9 => Cell::layer_tap(k, LayerName::Button),
            1 | 8 => Cell::mod_tap(k, Modifier::Ralt),
            _ => Cell::key(k),
        }
    });

    [top, home, bottom]
}

/// Thumb row shared by BASE and EXTRA.
fn layer_thumbs() -> [Cell; THUMB_COUNT] {
    THUMB_LAYERS.map(|(key, layer)| Cell::layer_tap(key, layer))
}
