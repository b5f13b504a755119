//! Kanata document assembly.
//!
//! Turns a validated variant into the complete `.kbd` text: header comment,
//! `defcfg`, the fixed `defsrc` and the ten `deflayer` blocks.

// Allow format! appended to String - more readable for building documents
#![allow(clippy::format_push_string)]

use crate::error::Result;
use crate::layers::build_layers;
use crate::models::{Cell, ConfigVariant, LayerName, LayerSpec};
use crate::registry::{Registry, ResolvedVariant};
use std::fmt;

/// Column separator between cells.
pub const CELL_SEPARATOR: &str = "\t";

/// Indentation placed before the six thumb cells.
pub const THUMB_INDENT: &str = "\t\t";

/// Physical source declaration shared by every generated document.
pub const DEFSRC: &str = "\
;; Source: 36-key layout
(defsrc
  q w e r t   y u i o p
  a s d f g   h j k l ;
  z x c v b   n m , . /
  esc spc tab   ent bspc del
)
";

/// Engine options: pass through and then block keys outside `defsrc`.
pub const DEFCFG: &str = "\
(defcfg
  process-unmapped-keys yes
  block-unmapped-keys yes
)
";

/// Display names of the four parameters, printed in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Alpha layout display name
    pub alpha: String,
    /// Navigation style description
    pub navigation: String,
    /// Whether thumbs are flipped
    pub flipped: bool,
    /// Platform display name
    pub platform: String,
}

impl DocumentHeader {
    fn from_variant(variant: &ResolvedVariant<'_>) -> Self {
        Self {
            alpha: variant.alpha.name.clone(),
            navigation: variant.nav.description.clone(),
            flipped: variant.flip,
            platform: variant.platform.name.clone(),
        }
    }
}

impl fmt::Display for DocumentHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; Miryoku Kanata Configuration")?;
        writeln!(f, ";;")?;
        writeln!(f, ";; Alpha Layout: {}", self.alpha)?;
        writeln!(f, ";; Navigation: {}", self.navigation)?;
        writeln!(
            f,
            ";; Layers: {}",
            if self.flipped { "Flipped" } else { "Standard" }
        )?;
        writeln!(f, ";; Platform: {}", self.platform)?;
        writeln!(f, ";;")?;
        writeln!(f, ";; Generated from Miryoku specification")?;
        writeln!(f, ";; https://github.com/manna-harbour/miryoku")
    }
}

/// A fully assembled document for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Variant this document was generated for
    pub variant: ConfigVariant,
    /// Header parameters
    pub header: DocumentHeader,
    /// All ten layers in document order
    pub layers: [LayerSpec; 10],
}

impl GeneratedDocument {
    /// Looks up one layer by name.
    pub fn layer(&self, name: LayerName) -> &LayerSpec {
        // Declaration order of LayerName matches LayerName::ALL.
        &self.layers[name as usize]
    }

    /// Serializes the document to Kanata text.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header.to_string());
        output.push('\n');
        output.push_str(DEFCFG);
        output.push('\n');
        output.push_str(DEFSRC);

        for layer in &self.layers {
            output.push('\n');
            output.push_str(&format!(";; {}\n", self.layer_comment(layer.name)));
            output.push_str(&render_layer(layer));
        }

        output
    }

    fn layer_comment(&self, name: LayerName) -> String {
        match name {
            LayerName::Base => format!("Base Layer - {} with home row mods", self.header.alpha),
            LayerName::Extra => "Extra Layer - QWERTY alternative (switchable via tap-dance)".into(),
            LayerName::Tap => "Tap Layer - No dual-function keys".into(),
            LayerName::Nav => "Navigation Layer".into(),
            LayerName::Mouse => "Mouse Layer".into(),
            LayerName::Button => "Button Layer".into(),
            LayerName::Media => "Media Layer".into(),
            LayerName::Num => "Number Layer".into(),
            LayerName::Sym => "Symbol Layer".into(),
            LayerName::Fun => "Function Layer".into(),
        }
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Serializes one layer as a `deflayer` block.
pub fn render_layer(layer: &LayerSpec) -> String {
    let mut output = format!("(deflayer {}\n", layer.name);

    for row in &layer.rows {
        output.push_str(&join_cells(row));
        output.push('\n');
    }
    output.push_str(THUMB_INDENT);
    output.push_str(&join_cells(&layer.thumbs));
    output.push_str("\n)\n");

    output
}

fn join_cells(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Generates Kanata documents for variants of one registry.
pub struct KanataGenerator<'a> {
    registry: &'a Registry,
}

impl<'a> KanataGenerator<'a> {
    /// Creates a generator over a loaded registry.
    pub const fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Validates the variant, then builds its document.
    ///
    /// Nothing is built unless every parameter resolves.
    pub fn generate(&self, variant: &ConfigVariant) -> Result<GeneratedDocument> {
        let resolved = self.registry.resolve(variant)?;
        Ok(GeneratedDocument {
            variant: variant.clone(),
            header: DocumentHeader::from_variant(&resolved),
            layers: build_layers(&resolved),
        })
    }

    /// Validates the variant and returns the document text.
    pub fn generate_text(&self, variant: &ConfigVariant) -> Result<String> {
        Ok(self.generate(variant)?.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    fn text(alpha: &str, nav: &str, flip: bool, platform: &str) -> String {
        let registry = Registry::load().unwrap();
        KanataGenerator::new(&registry)
            .generate_text(&ConfigVariant::new(alpha, nav, flip, platform))
            .unwrap()
    }

    #[test]
    fn test_header_names_parameters() {
        let doc = text("dvorak", "invertedt", true, "win");
        assert!(doc.starts_with(";; Miryoku Kanata Configuration\n;;\n"));
        assert!(doc.contains(";; Alpha Layout: Dvorak\n"));
        assert!(doc.contains(";; Navigation: Inverted-T navigation (arrows in T-shape)\n"));
        assert!(doc.contains(";; Layers: Flipped\n"));
        assert!(doc.contains(";; Platform: Windows\n"));
    }

    #[test]
    fn test_layer_blocks_in_order() {
        let doc = text("colemakdh", "default", false, "nix");
        let positions: Vec<_> = LayerName::ALL
            .iter()
            .map(|name| doc.find(&format!("(deflayer {name}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(doc.matches("(deflayer ").count(), 10);
        assert!(doc.ends_with(")\n"));
    }

    #[test]
    fn test_tap_layer_first_row() {
        let doc = text("colemakdh", "default", false, "nix");
        assert!(doc.contains("(deflayer U_TAP\nq\tw\tf\tp\tb\tj\tl\tu\ty\t'\n"));
        assert!(doc.contains("C-z"));
    }

    #[test]
    fn test_layer_rendering_shape() {
        let registry = Registry::load().unwrap();
        let document = KanataGenerator::new(&registry)
            .generate(&ConfigVariant::new("qwerty", "vi", false, "mac"))
            .unwrap();
        let block = render_layer(document.layer(LayerName::Media));
        let lines: Vec<_> = block.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "(deflayer U_MEDIA");
        assert_eq!(lines[1].split('\t').count(), 10);
        assert_eq!(lines[4], "\t\tXX\tXX\tXX\tXX\tpp\tmute");
        assert_eq!(lines[5], ")");
    }

    #[test]
    fn test_defsrc_present_once() {
        let doc = text("halmak", "vi", false, "mac");
        assert_eq!(doc.matches(DEFSRC).count(), 1);
        assert!(doc.contains("process-unmapped-keys yes"));
        assert!(doc.contains("block-unmapped-keys yes"));
    }

    #[test]
    fn test_generation_fails_without_output() {
        let registry = Registry::load().unwrap();
        let generator = KanataGenerator::new(&registry);
        assert!(matches!(
            generator.generate(&ConfigVariant::new("colemakdh", "vi", true, "nix")),
            Err(GenerateError::InvalidVariantCombination { .. })
        ));
        assert!(matches!(
            generator.generate_text(&ConfigVariant::new("colemakdh", "default", false, "amiga")),
            Err(GenerateError::UnknownPlatformId(_))
        ));
    }

    #[test]
    fn test_layer_lookup() {
        let registry = Registry::load().unwrap();
        let document = KanataGenerator::new(&registry)
            .generate(&ConfigVariant::new("colemakdh", "default", false, "nix"))
            .unwrap();
        for name in LayerName::ALL {
            assert_eq!(document.layer(name).name, name);
        }
    }
}
