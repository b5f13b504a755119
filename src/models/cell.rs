//! Grid cell definitions and their Kanata serialization.

use crate::models::layer::LayerName;
use serde::{Serialize, Serializer};
use std::fmt;

/// Tap window for every dual-role key, in milliseconds.
pub const TAP_TIMEOUT_MS: u16 = 200;

/// Hold window for every dual-role key, in milliseconds.
pub const HOLD_TIMEOUT_MS: u16 = 200;

/// Tap-dance window for base-layer switching cells, in milliseconds.
pub const TAP_DANCE_TIMEOUT_MS: u16 = 200;

/// Kanata's "no action" keyword.
pub const NO_ACTION: &str = "XX";

/// Modifier emitted when a dual-role key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// GUI / Super / Command
    Met,
    /// Left Alt / Option
    Alt,
    /// Left Control
    Ctl,
    /// Left Shift
    Sft,
    /// Right Alt (AltGr), the secondary shift on the bottom corners
    Ralt,
}

impl Modifier {
    /// Home-row modifier order for the left hand, pinky to index.
    pub const LEFT_HOME: [Self; 4] = [Self::Met, Self::Alt, Self::Ctl, Self::Sft];

    /// Home-row modifier order for the right hand, index to pinky.
    pub const RIGHT_HOME: [Self; 4] = [Self::Sft, Self::Ctl, Self::Alt, Self::Met];

    /// Kanata key name for this modifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Alt => "alt",
            Self::Ctl => "ctl",
            Self::Sft => "sft",
            Self::Ralt => "ralt",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position of a layer grid.
///
/// Every layer in a generated document is built exclusively from these five
/// cases; [`fmt::Display`] yields the Kanata action expression, which is
/// also what a cell serializes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Emits a single key or chord (e.g. `q`, `C-z`).
    Plain(String),
    /// Taps a key, holds a modifier.
    TapHold {
        /// Key emitted on tap
        tap: String,
        /// Modifier held past the hold window
        hold: Modifier,
        /// Tap window in milliseconds
        tap_timeout_ms: u16,
        /// Hold window in milliseconds
        hold_timeout_ms: u16,
    },
    /// A single quick tap persistently switches to another layer.
    TapDance {
        /// Tap-dance window in milliseconds
        timeout_ms: u16,
        /// Layer made active on tap
        target: LayerName,
    },
    /// Taps a key, holds an overlay layer active.
    LayerToggle {
        /// Key emitted on tap
        key: String,
        /// Overlay active while held
        layer: LayerName,
    },
    /// Emits nothing.
    Transparent,
}

impl Cell {
    /// A plain key or chord.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Plain(key.into())
    }

    /// A home-row style dual-role key with the standard timing.
    pub fn mod_tap(tap: impl Into<String>, hold: Modifier) -> Self {
        Self::TapHold {
            tap: tap.into(),
            hold,
            tap_timeout_ms: TAP_TIMEOUT_MS,
            hold_timeout_ms: HOLD_TIMEOUT_MS,
        }
    }

    /// A key that holds an overlay layer.
    pub fn layer_tap(key: impl Into<String>, layer: LayerName) -> Self {
        Self::LayerToggle {
            key: key.into(),
            layer,
        }
    }

    /// A tap-dance cell switching to `target`.
    pub const fn switch_to(target: LayerName) -> Self {
        Self::TapDance {
            timeout_ms: TAP_DANCE_TIMEOUT_MS,
            target,
        }
    }

    /// Interprets a cell written in registry data: `XX` is no action,
    /// anything else is a plain key.
    pub fn from_data(raw: &str) -> Self {
        if raw == NO_ACTION {
            Self::Transparent
        } else {
            Self::Plain(raw.to_string())
        }
    }

    /// Returns true if this cell emits nothing.
    pub const fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

impl From<Modifier> for Cell {
    fn from(modifier: Modifier) -> Self {
        Self::Plain(modifier.as_str().to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(key) => f.write_str(key),
            Self::TapHold {
                tap,
                hold,
                tap_timeout_ms,
                hold_timeout_ms,
            } => write!(
                f,
                "(tap-hold-release {tap_timeout_ms} {hold_timeout_ms} {tap} {hold})"
            ),
            Self::TapDance { timeout_ms, target } => write!(
                f,
                "(tap-dance {timeout_ms} ({NO_ACTION} (layer-switch {target})))"
            ),
            Self::LayerToggle { key, layer } => write!(
                f,
                "(tap-hold-release {TAP_TIMEOUT_MS} {HOLD_TIMEOUT_MS} {key} (layer-toggle {layer}))"
            ),
            Self::Transparent => f.write_str(NO_ACTION),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renders_key() {
        assert_eq!(Cell::key("q").to_string(), "q");
        assert_eq!(Cell::key("C-S-z").to_string(), "C-S-z");
    }

    #[test]
    fn test_mod_tap_renders_tap_hold_release() {
        assert_eq!(
            Cell::mod_tap("a", Modifier::Met).to_string(),
            "(tap-hold-release 200 200 a met)"
        );
    }

    #[test]
    fn test_layer_tap_renders_layer_toggle() {
        assert_eq!(
            Cell::layer_tap("spc", LayerName::Nav).to_string(),
            "(tap-hold-release 200 200 spc (layer-toggle U_NAV))"
        );
    }

    #[test]
    fn test_switch_to_renders_tap_dance() {
        assert_eq!(
            Cell::switch_to(LayerName::Tap).to_string(),
            "(tap-dance 200 (XX (layer-switch U_TAP)))"
        );
    }

    #[test]
    fn test_from_data() {
        assert_eq!(Cell::from_data("XX"), Cell::Transparent);
        assert_eq!(Cell::from_data("left"), Cell::key("left"));
        assert!(Cell::Transparent.is_transparent());
        assert_eq!(Cell::Transparent.to_string(), "XX");
    }

    #[test]
    fn test_cells_serialize_as_kanata_text() {
        assert_eq!(serde_json::to_string(&Cell::key("q")).unwrap(), "\"q\"");
        assert_eq!(serde_json::to_string(&Cell::Transparent).unwrap(), "\"XX\"");
        assert_eq!(
            serde_json::to_string(&Cell::mod_tap("a", Modifier::Met)).unwrap(),
            "\"(tap-hold-release 200 200 a met)\""
        );
        assert_eq!(
            serde_json::to_value(Cell::switch_to(LayerName::Base)).unwrap(),
            "(tap-dance 200 (XX (layer-switch U_BASE)))"
        );
    }

    #[test]
    fn test_modifier_orders_are_mirrored() {
        let mut reversed = Modifier::RIGHT_HOME;
        reversed.reverse();
        assert_eq!(reversed, Modifier::LEFT_HOME);
        assert_eq!(Cell::from(Modifier::Ralt), Cell::key("ralt"));
    }
}
