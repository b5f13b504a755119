//! Layer grid builders.
//!
//! Each builder returns its layer in the unflipped orientation;
//! [`build_layers`] applies the thumb flip afterwards according to each
//! layer's [`FlipScope`](crate::models::FlipScope), so no grid is authored
//! twice.

pub mod alpha;
pub mod nav;
pub mod overlays;

use crate::models::layer::{LayerName, LayerSpec, ROW_WIDTH};
use crate::models::{Cell, Modifier};
use crate::registry::{PlatformBindings, ResolvedVariant};

/// A five-cell half row.
pub type Half = [Cell; 5];

/// No-action cell.
pub const XX: Cell = Cell::Transparent;

/// Builds all ten layers for a variant, in document order.
pub fn build_layers(variant: &ResolvedVariant<'_>) -> [LayerSpec; 10] {
    [
        alpha::base(variant.alpha),
        alpha::extra(),
        alpha::tap(variant.alpha),
        nav::nav(variant.nav, variant.platform),
        overlays::mouse(variant.platform),
        overlays::button(variant.platform),
        overlays::media(),
        overlays::num(),
        overlays::sym(),
        overlays::fun(),
    ]
    .map(|layer| layer.flipped(variant.flip))
}

/// Joins a left and right half into one row.
pub fn join(left: Half, right: Half) -> [Cell; ROW_WIDTH] {
    let [l0, l1, l2, l3, l4] = left;
    let [r0, r1, r2, r3, r4] = right;
    [l0, l1, l2, l3, l4, r0, r1, r2, r3, r4]
}

/// Five plain keys.
pub fn keys(names: [&str; 5]) -> Half {
    names.map(Cell::from_data)
}

/// Left-hand top row of the overlays: base-layer switches.
pub fn base_switches_left() -> Half {
    [
        XX,
        Cell::switch_to(LayerName::Tap),
        Cell::switch_to(LayerName::Extra),
        Cell::switch_to(LayerName::Base),
        XX,
    ]
}

/// Right-hand top row of the overlays: base-layer switches.
pub fn base_switches_right() -> Half {
    [
        XX,
        Cell::switch_to(LayerName::Base),
        Cell::switch_to(LayerName::Extra),
        Cell::switch_to(LayerName::Tap),
        XX,
    ]
}

/// Left-hand home row of the overlays: plain modifiers.
pub fn modifiers_left() -> Half {
    let [m0, m1, m2, m3] = Modifier::LEFT_HOME.map(Cell::from);
    [m0, m1, m2, m3, XX]
}

/// Right-hand home row of the overlays: plain modifiers.
pub fn modifiers_right() -> Half {
    let [m0, m1, m2, m3] = Modifier::RIGHT_HOME.map(Cell::from);
    [XX, m0, m1, m2, m3]
}

/// Left-hand bottom row: secondary shift plus overlay reselection.
pub fn reselect_left(first: LayerName, second: LayerName) -> Half {
    [
        XX,
        Cell::from(Modifier::Ralt),
        Cell::switch_to(first),
        Cell::switch_to(second),
        XX,
    ]
}

/// Right-hand bottom row: overlay reselection plus secondary shift.
pub fn reselect_right(first: LayerName, second: LayerName) -> Half {
    [
        XX,
        Cell::switch_to(first),
        Cell::switch_to(second),
        Cell::from(Modifier::Ralt),
        XX,
    ]
}

/// Clipboard chords for the right hand: redo, paste, copy, cut, undo.
pub fn clipboard_right(platform: &PlatformBindings) -> Half {
    [
        Cell::key(&platform.redo),
        Cell::key(&platform.paste),
        Cell::key(&platform.copy),
        Cell::key(&platform.cut),
        Cell::key(&platform.undo),
    ]
}

/// Clipboard chords for the left hand: undo, cut, copy, paste, then `last`.
pub fn clipboard_left(platform: &PlatformBindings, last: &str) -> Half {
    [
        Cell::key(&platform.undo),
        Cell::key(&platform.cut),
        Cell::key(&platform.copy),
        Cell::key(&platform.paste),
        Cell::key(last),
    ]
}
