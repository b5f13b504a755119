//! Fixed overlay layers: MOUSE, BUTTON, MEDIA, NUM, SYM and FUN.
//!
//! The first three are operated by the right hand with the left hand
//! holding modifiers; NUM, SYM and FUN are the other way round.

use crate::layers::{
    base_switches_left, base_switches_right, clipboard_left, clipboard_right, join, keys,
    modifiers_left, modifiers_right, reselect_left, reselect_right, XX,
};
use crate::models::layer::{LayerName, LayerSpec};
use crate::models::Cell;
use crate::registry::PlatformBindings;

/// Mouse movement under the right hand, buttons on the right thumbs.
pub fn mouse(platform: &PlatformBindings) -> LayerSpec {
    LayerSpec::new(
        LayerName::Mouse,
        [
            join(base_switches_left(), clipboard_right(platform)),
            join(
                modifiers_left(),
                keys([
                    "XX",
                    "(movemouse-left 5 1)",
                    "(movemouse-down 5 1)",
                    "(movemouse-up 5 1)",
                    "(movemouse-right 5 1)",
                ]),
            ),
            join(
                reselect_left(LayerName::Sym, LayerName::Mouse),
                keys(["XX"; 5]),
            ),
        ],
        thumbs(["XX", "XX", "XX", "mrgt", "mlft", "mmid"]),
    )
}

/// Clipboard on both outer rows, mouse buttons on every thumb.
pub fn button(platform: &PlatformBindings) -> LayerSpec {
    let undo = platform.undo.as_str();
    LayerSpec::new(
        LayerName::Button,
        [
            join(
                clipboard_left(platform, &platform.redo),
                clipboard_right(platform),
            ),
            join(modifiers_left(), modifiers_right()),
            join(
                clipboard_left(platform, undo),
                [
                    Cell::key(undo),
                    Cell::key(&platform.paste),
                    Cell::key(&platform.copy),
                    Cell::key(&platform.cut),
                    Cell::key(undo),
                ],
            ),
        ],
        thumbs(["mmid", "mlft", "mrgt", "mrgt", "mlft", "mmid"]),
    )
}

/// Media transport on the right home row.
pub fn media() -> LayerSpec {
    LayerSpec::new(
        LayerName::Media,
        [
            join(base_switches_left(), keys(["XX"; 5])),
            join(modifiers_left(), keys(["XX", "prev", "vold", "volu", "next"])),
            join(
                reselect_left(LayerName::Fun, LayerName::Media),
                keys(["XX"; 5]),
            ),
        ],
        thumbs(["XX", "XX", "XX", "XX", "pp", "mute"]),
    )
}

/// Number pad under the left hand.
pub fn num() -> LayerSpec {
    LayerSpec::new(
        LayerName::Num,
        [
            join(keys(["[", "7", "8", "9", "]"]), base_switches_right()),
            join(keys([";", "4", "5", "6", "="]), modifiers_right()),
            join(
                keys(["`", "1", "2", "3", "\\"]),
                reselect_right(LayerName::Num, LayerName::Nav),
            ),
        ],
        thumbs([".", "0", "-", "XX", "XX", "XX"]),
    )
}

/// Shifted number-pad symbols under the left hand.
pub fn sym() -> LayerSpec {
    LayerSpec::new(
        LayerName::Sym,
        [
            join(keys(["S-{", "S-7", "S-8", "S-9", "S-}"]), base_switches_right()),
            join(
                keys(["S-scln", "S-4", "S-5", "S-6", "S-eql"]),
                modifiers_right(),
            ),
            join(
                keys(["S-grv", "S-1", "S-2", "S-3", "S-\\"]),
                reselect_right(LayerName::Sym, LayerName::Mouse),
            ),
        ],
        thumbs(["S-9", "S-0", "S-min", "XX", "XX", "XX"]),
    )
}

/// Function keys under the left hand.
pub fn fun() -> LayerSpec {
    LayerSpec::new(
        LayerName::Fun,
        [
            join(keys(["f12", "f7", "f8", "f9", "102d"]), base_switches_right()),
            join(keys(["f11", "f4", "f5", "f6", "slck"]), modifiers_right()),
            join(
                keys(["f10", "f1", "f2", "f3", "pause"]),
                reselect_right(LayerName::Fun, LayerName::Media),
            ),
        ],
        thumbs(["comp", "spc", "tab", "XX", "XX", "XX"]),
    )
}

fn thumbs(names: [&str; 6]) -> [Cell; 6] {
    names.map(Cell::from_data)
}
