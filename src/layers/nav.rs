//! Navigation layer.

use crate::layers::{
    base_switches_left, clipboard_right, join, modifiers_left, reselect_left, XX,
};
use crate::models::layer::{LayerName, LayerSpec};
use crate::models::Cell;
use crate::registry::{NavVariant, PlatformBindings};

/// Navigation layer for one style.
///
/// The left hand and the clipboard row are the same for every style; only
/// the right-hand home and bottom rows come from the [`NavVariant`].
pub fn nav(variant: &NavVariant, platform: &PlatformBindings) -> LayerSpec {
    let home = std::array::from_fn(|i| Cell::from_data(&variant.home[i]));
    let bottom = std::array::from_fn(|i| Cell::from_data(&variant.bottom[i]));

    LayerSpec::new(
        LayerName::Nav,
        [
            join(base_switches_left(), clipboard_right(platform)),
            join(modifiers_left(), home),
            join(reselect_left(LayerName::Num, LayerName::Nav), bottom),
        ],
        [
            XX,
            XX,
            XX,
            Cell::key("ent"),
            Cell::key("bspc"),
            Cell::key("del"),
        ],
    )
}
