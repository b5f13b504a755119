//! Alpha layouts, navigation styles and platform shortcuts.
//!
//! The registry is parsed once from TOML (the embedded `registry.toml` or a
//! user-supplied file), validated, and then shared by reference with every
//! generation call. Nothing in it changes after loading.

use crate::error::{GenerateError, Result};
use crate::kanata::filename::FLIP_SEGMENT;
use crate::models::layer::ROW_WIDTH;
use crate::models::ConfigVariant;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Built-in registry data.
pub const BUILTIN_REGISTRY: &str = include_str!("registry.toml");

/// Number of alphabetic keys on the board.
pub const ALPHA_KEY_COUNT: usize = 30;

/// Width of the right-hand navigation rows.
pub const NAV_HALF_WIDTH: usize = 5;

/// Ids become filename segments, so '-' would make names ambiguous.
static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("static regex"));

/// Returns true if `token` is a single Kanata action atom.
///
/// Cells are tab-separated and parenthesized expressions are built here, so
/// data may not contain whitespace or parentheses.
pub fn is_key_token(token: &str) -> bool {
    !token.is_empty()
        && !token
            .chars()
            .any(|c| c.is_whitespace() || c == '(' || c == ')')
}

fn check_tokens<'a>(
    table: &'static str,
    id: &str,
    tokens: impl IntoIterator<Item = &'a String>,
) -> Option<GenerateError> {
    tokens
        .into_iter()
        .find(|token| !is_key_token(token))
        .map(|token| GenerateError::InvalidKeyToken {
            table,
            id: id.to_string(),
            token: token.clone(),
        })
}

/// Alphabetic layout, indexed by physical position.
///
/// Positions 0-9 are the top row, 10-19 the home row and 20-29 the bottom
/// row, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlphaLayout {
    /// Registry id (e.g. "colemakdh")
    pub id: String,
    /// Display name (e.g. "Colemak Mod-DH")
    pub name: String,
    /// Exactly 30 distinct keycaps
    pub keys: Vec<String>,
}

impl AlphaLayout {
    /// Key at a physical position.
    pub fn key(&self, position: usize) -> &str {
        &self.keys[position]
    }

    /// One of the three rows as a slice of ten keys.
    pub fn row(&self, row: usize) -> &[String] {
        &self.keys[row * ROW_WIDTH..(row + 1) * ROW_WIDTH]
    }

    /// Checks the 30-unique-keys invariant and that every key is one token.
    pub fn validate(&self) -> Result<()> {
        if self.keys.len() != ALPHA_KEY_COUNT {
            return Err(GenerateError::LayoutLengthError {
                id: self.id.clone(),
                reason: format!(
                    "expected {ALPHA_KEY_COUNT} keys, found {}",
                    self.keys.len()
                ),
            });
        }

        let mut seen = HashSet::new();
        for key in &self.keys {
            if !is_key_token(key) {
                return Err(GenerateError::InvalidKeyToken {
                    table: "alpha",
                    id: self.id.clone(),
                    token: key.clone(),
                });
            }
            if !seen.insert(key.as_str()) {
                return Err(GenerateError::LayoutLengthError {
                    id: self.id.clone(),
                    reason: format!("duplicate key '{key}'"),
                });
            }
        }

        Ok(())
    }
}

/// Navigation layer style.
///
/// Only the right-hand home and bottom rows differ between styles; `XX`
/// in either row means no action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavVariant {
    /// Registry id (e.g. "vi")
    pub id: String,
    /// Human description used in the document header
    pub description: String,
    /// Whether this style may be combined with flipped thumbs
    #[serde(default = "default_flippable")]
    pub flippable: bool,
    /// Right-hand home row, index to pinky
    pub home: [String; NAV_HALF_WIDTH],
    /// Right-hand bottom row, index to pinky
    pub bottom: [String; NAV_HALF_WIDTH],
}

const fn default_flippable() -> bool {
    true
}

/// Editing chords for one host OS family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformBindings {
    /// Registry id (e.g. "mac")
    pub id: String,
    /// Display name (e.g. "macOS")
    pub name: String,
    /// Undo chord
    pub undo: String,
    /// Redo chord
    pub redo: String,
    /// Cut chord
    pub cut: String,
    /// Copy chord
    pub copy: String,
    /// Paste chord
    pub paste: String,
}

/// Validated lookup tables for every generation axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registry {
    default_alpha: String,
    default_nav: String,
    #[serde(rename = "alpha")]
    alphas: Vec<AlphaLayout>,
    #[serde(rename = "nav")]
    navs: Vec<NavVariant>,
    #[serde(rename = "platform")]
    platforms: Vec<PlatformBindings>,
}

/// A variant whose ids have been checked and looked up.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVariant<'a> {
    /// Alpha layout
    pub alpha: &'a AlphaLayout,
    /// Navigation style
    pub nav: &'a NavVariant,
    /// Whether thumbs are flipped
    pub flip: bool,
    /// Platform chords
    pub platform: &'a PlatformBindings,
}

impl Registry {
    /// Loads the built-in registry.
    pub fn load() -> Result<Self> {
        Self::from_toml_str(BUILTIN_REGISTRY)
    }

    /// Parses and validates registry TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry = Self::from_toml_str_unchecked(content)?;
        match registry.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(registry),
        }
    }

    /// Parses registry TOML without checking layout or id invariants.
    ///
    /// Use [`Registry::problems`] afterwards to inspect what is wrong.
    pub fn from_toml_str_unchecked(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Every invariant violation in this registry, in table order.
    pub fn problems(&self) -> Vec<GenerateError> {
        let mut problems = Vec::new();

        let mut check_ids = |table: &'static str, ids: Vec<&str>| {
            let mut seen = HashSet::new();
            for id in ids {
                if !ID_PATTERN.is_match(id) {
                    problems.push(GenerateError::InvalidRegistryId {
                        table,
                        id: id.to_string(),
                    });
                }
                if !seen.insert(id) {
                    problems.push(GenerateError::DuplicateRegistryId {
                        table,
                        id: id.to_string(),
                    });
                }
            }
        };
        check_ids("alpha", self.alphas.iter().map(|a| a.id.as_str()).collect());
        check_ids("nav", self.navs.iter().map(|n| n.id.as_str()).collect());
        check_ids(
            "platform",
            self.platforms.iter().map(|p| p.id.as_str()).collect(),
        );

        // A nav named like the flip segment would share file names with flipped variants
        problems.extend(
            self.navs
                .iter()
                .filter(|n| n.id == FLIP_SEGMENT)
                .map(|n| GenerateError::ReservedRegistryId {
                    table: "nav",
                    id: n.id.clone(),
                }),
        );

        problems.extend(self.alphas.iter().filter_map(|a| a.validate().err()));
        problems.extend(
            self.navs
                .iter()
                .filter_map(|n| check_tokens("nav", &n.id, n.home.iter().chain(&n.bottom))),
        );
        problems.extend(self.platforms.iter().filter_map(|p| {
            check_tokens("platform", &p.id, [&p.undo, &p.redo, &p.cut, &p.copy, &p.paste])
        }));

        if self.alpha(&self.default_alpha).is_err() {
            problems.push(GenerateError::UnknownDefault {
                table: "alpha",
                id: self.default_alpha.clone(),
            });
        }
        if self.nav(&self.default_nav).is_err() {
            problems.push(GenerateError::UnknownDefault {
                table: "nav",
                id: self.default_nav.clone(),
            });
        }

        problems
    }

    /// Looks up an alpha layout.
    pub fn alpha(&self, id: &str) -> Result<&AlphaLayout> {
        self.alphas
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| GenerateError::UnknownAlphaId(id.to_string()))
    }

    /// Looks up a navigation style.
    pub fn nav(&self, id: &str) -> Result<&NavVariant> {
        self.navs
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| GenerateError::UnknownNavId(id.to_string()))
    }

    /// Looks up a platform.
    pub fn platform(&self, id: &str) -> Result<&PlatformBindings> {
        self.platforms
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| GenerateError::UnknownPlatformId(id.to_string()))
    }

    /// All alpha layouts in registry order.
    pub fn alphas(&self) -> &[AlphaLayout] {
        &self.alphas
    }

    /// All navigation styles in registry order.
    pub fn navs(&self) -> &[NavVariant] {
        &self.navs
    }

    /// All platforms in registry order.
    pub fn platforms(&self) -> &[PlatformBindings] {
        &self.platforms
    }

    /// Alpha id whose segment is omitted from filenames.
    pub fn default_alpha(&self) -> &str {
        &self.default_alpha
    }

    /// Navigation id whose segment is omitted from filenames.
    pub fn default_nav(&self) -> &str {
        &self.default_nav
    }

    /// Validates a variant and looks up all of its parameters.
    pub fn resolve(&self, variant: &ConfigVariant) -> Result<ResolvedVariant<'_>> {
        let alpha = self.alpha(&variant.alpha)?;
        let nav = self.nav(&variant.nav)?;
        let platform = self.platform(&variant.platform)?;

        if variant.flip && !nav.flippable {
            return Err(GenerateError::InvalidVariantCombination {
                nav: nav.id.clone(),
            });
        }

        Ok(ResolvedVariant {
            alpha,
            nav,
            flip: variant.flip,
            platform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::load().unwrap()
    }

    fn with_alpha_keys(keys: &str) -> String {
        BUILTIN_REGISTRY.replacen(
            "[[alpha]]",
            &format!("[[alpha]]\nid = \"broken\"\nname = \"Broken\"\nkeys = [{keys}]\n\n[[alpha]]"),
            1,
        )
    }

    #[test]
    fn test_builtin_registry_loads() {
        let registry = registry();
        assert_eq!(registry.alphas().len(), 9);
        assert_eq!(registry.navs().len(), 3);
        assert_eq!(registry.platforms().len(), 3);
        assert_eq!(registry.default_alpha(), "colemakdh");
        assert_eq!(registry.default_nav(), "default");
        assert!(registry.problems().is_empty());
    }

    #[test]
    fn test_every_alpha_has_thirty_unique_keys() {
        for alpha in registry().alphas() {
            assert_eq!(alpha.keys.len(), ALPHA_KEY_COUNT, "{}", alpha.id);
            let unique: HashSet<_> = alpha.keys.iter().collect();
            assert_eq!(unique.len(), ALPHA_KEY_COUNT, "{}", alpha.id);
        }
    }

    #[test]
    fn test_alpha_rows() {
        let registry = registry();
        let colemak = registry.alpha("colemakdh").unwrap();
        assert_eq!(colemak.row(0).join(" "), "q w f p b j l u y '");
        assert_eq!(colemak.key(10), "a");
        assert_eq!(colemak.row(2)[9], "/");
    }

    #[test]
    fn test_unknown_ids() {
        let registry = registry();
        assert!(matches!(
            registry.alpha("bepo"),
            Err(GenerateError::UnknownAlphaId(id)) if id == "bepo"
        ));
        assert!(matches!(
            registry.nav("emacs"),
            Err(GenerateError::UnknownNavId(_))
        ));
        assert!(matches!(
            registry.platform("bsd"),
            Err(GenerateError::UnknownPlatformId(_))
        ));
    }

    #[test]
    fn test_only_vi_is_not_flippable() {
        let registry = registry();
        let fixed: Vec<_> = registry
            .navs()
            .iter()
            .filter(|n| !n.flippable)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(fixed, ["vi"]);
    }

    #[test]
    fn test_resolve_rejects_vi_flip() {
        let registry = registry();
        let err = registry
            .resolve(&ConfigVariant::new("qwerty", "vi", true, "nix"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidVariantCombination { nav } if nav == "vi"));

        let ok = registry
            .resolve(&ConfigVariant::new("qwerty", "vi", false, "nix"))
            .unwrap();
        assert_eq!(ok.nav.id, "vi");
        assert!(!ok.flip);
    }

    #[test]
    fn test_resolve_checks_alpha_first() {
        let err = registry()
            .resolve(&ConfigVariant::new("nope", "nope", false, "nope"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::UnknownAlphaId(_)));
    }

    #[test]
    fn test_short_layout_rejected() {
        let err = Registry::from_toml_str(&with_alpha_keys("\"a\", \"b\"")).unwrap_err();
        assert!(matches!(err, GenerateError::LayoutLengthError { id, .. } if id == "broken"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let keys = (0..29)
            .map(|i| format!("\"k{i}\""))
            .chain(std::iter::once("\"k0\"".to_string()))
            .collect::<Vec<_>>()
            .join(", ");
        let err = Registry::from_toml_str(&with_alpha_keys(&keys)).unwrap_err();
        assert!(err.to_string().contains("duplicate key 'k0'"));
    }

    #[test]
    fn test_hyphenated_id_rejected() {
        let content = BUILTIN_REGISTRY.replace("id = \"workman\"", "id = \"work-man\"");
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRegistryId { table: "alpha", .. }));
    }

    #[test]
    fn test_flip_nav_id_reserved() {
        let content = BUILTIN_REGISTRY.replacen(
            "[[platform]]",
            "[[nav]]\nid = \"flip\"\ndescription = \"Clashes\"\nhome = [\"a\", \"b\", \"c\", \"d\", \"e\"]\nbottom = [\"f\", \"g\", \"h\", \"i\", \"j\"]\n\n[[platform]]",
            1,
        );
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::ReservedRegistryId { table: "nav", id } if id == "flip"
        ));
    }

    #[test]
    fn test_flip_alpha_id_allowed() {
        // Alpha ids live in their own directory, so "flip" cannot clash there
        let content = BUILTIN_REGISTRY.replace("id = \"workman\"", "id = \"flip\"");
        assert!(Registry::from_toml_str(&content).is_ok());
    }

    #[test]
    fn test_key_tokens() {
        assert!(is_key_token("q"));
        assert!(is_key_token("C-S-z"));
        assert!(is_key_token("'"));
        assert!(!is_key_token(""));
        assert!(!is_key_token("q r"));
        assert!(!is_key_token("a\t"));
        assert!(!is_key_token("(layer-switch"));
        assert!(!is_key_token("x)"));
    }

    #[test]
    fn test_alpha_key_with_space_rejected() {
        let keys = (0..29)
            .map(|i| format!("\"k{i}\""))
            .chain(std::iter::once("\"q r\"".to_string()))
            .collect::<Vec<_>>()
            .join(", ");
        let err = Registry::from_toml_str(&with_alpha_keys(&keys)).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidKeyToken { table: "alpha", id, token } if id == "broken" && token == "q r"
        ));
    }

    #[test]
    fn test_empty_alpha_key_rejected() {
        let keys = (0..29)
            .map(|i| format!("\"k{i}\""))
            .chain(std::iter::once("\"\"".to_string()))
            .collect::<Vec<_>>()
            .join(", ");
        let err = Registry::from_toml_str(&with_alpha_keys(&keys)).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidKeyToken { table: "alpha", .. }));
    }

    #[test]
    fn test_nav_cell_with_parentheses_rejected() {
        let content = BUILTIN_REGISTRY.replacen("\"left\", \"down\"", "\"(left)\", \"down\"", 1);
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidKeyToken { table: "nav", id, token } if id == "default" && token == "(left)"
        ));
    }

    #[test]
    fn test_nav_bottom_cell_with_space_rejected() {
        let content = BUILTIN_REGISTRY.replacen("\"pgdn\", \"pgup\", \"end\"", "\"pgdn\", \"page up\", \"end\"", 1);
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidKeyToken { table: "nav", .. }));
    }

    #[test]
    fn test_empty_platform_chord_rejected() {
        let content = BUILTIN_REGISTRY.replace("undo = \"M-z\"", "undo = \"\"");
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidKeyToken { table: "platform", id, token } if id == "mac" && token.is_empty()
        ));
    }

    #[test]
    fn test_problems_is_repeatable() {
        let content = BUILTIN_REGISTRY.replace("id = \"workman\"", "id = \"work-man\"");
        let registry = Registry::from_toml_str_unchecked(&content).unwrap();
        assert_eq!(registry.problems().len(), 1);
        assert_eq!(registry.problems().len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let content = BUILTIN_REGISTRY.replace("id = \"win\"", "id = \"nix\"");
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::DuplicateRegistryId { table: "platform", .. }
        ));
    }

    #[test]
    fn test_missing_default_rejected() {
        let content = BUILTIN_REGISTRY.replace(
            "default_alpha = \"colemakdh\"",
            "default_alpha = \"missing\"",
        );
        let err = Registry::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, GenerateError::UnknownDefault { table: "alpha", .. }));
    }

    #[test]
    fn test_problems_collects_everything() {
        let content = with_alpha_keys("\"a\"").replace("id = \"win\"", "id = \"nix\"");
        let registry = Registry::from_toml_str_unchecked(&content).unwrap();
        assert_eq!(registry.problems().len(), 2);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Registry::from_toml_str("default_alpha = "),
            Err(GenerateError::RegistryParse(_))
        ));
    }
}
