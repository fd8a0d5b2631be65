//! Modifier Chain Construction
//!
//! Builds a priced item by folding an ordered sequence of modifier
//! constructors over a base, left to right. Construction is side-effect-free
//! and cannot fail for catalog modifiers; an empty sequence returns the base
//! unchanged.

use crate::item::Priced;
use crate::modifier::{Milk, Sugar, Whip};
use serde::{Deserialize, Serialize};

/// Zero-capture constructor wrapping one inner item into a new one
pub type ModifierCtor = fn(Box<dyn Priced>) -> Box<dyn Priced>;

/// Catalog of infallible modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Steamed milk, +0.50
    Milk,
    /// Sugar, +0.30
    Sugar,
    /// Whipped cream, +0.70
    Whip,
}

impl ModifierKind {
    /// Constructor for this catalog entry
    #[must_use]
    pub fn constructor(&self) -> ModifierCtor {
        match self {
            ModifierKind::Milk => |inner| Box::new(Milk::new(inner)),
            ModifierKind::Sugar => |inner| Box::new(Sugar::new(inner)),
            ModifierKind::Whip => |inner| Box::new(Whip::new(inner)),
        }
    }

    /// Fixed cost increment contributed by this catalog entry
    #[inline]
    #[must_use]
    pub fn surcharge(&self) -> rust_decimal::Decimal {
        match self {
            ModifierKind::Milk => Milk::surcharge(),
            ModifierKind::Sugar => Sugar::surcharge(),
            ModifierKind::Whip => Whip::surcharge(),
        }
    }

    /// Stable name for CLI/config lookup
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ModifierKind::Milk => "milk",
            ModifierKind::Sugar => "sugar",
            ModifierKind::Whip => "whip",
        }
    }

    /// Resolve a catalog entry from its stable name
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "milk" => Some(ModifierKind::Milk),
            "sugar" => Some(ModifierKind::Sugar),
            "whip" => Some(ModifierKind::Whip),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fold catalog modifiers over a base, left to right
///
/// # Postconditions
/// - cost equals the base cost plus the sum of each entry's surcharge
/// - label equals the base label followed by each suffix in sequence order
#[must_use]
pub fn compose(base: Box<dyn Priced>, kinds: &[ModifierKind]) -> Box<dyn Priced> {
    compose_with(base, kinds.iter().map(ModifierKind::constructor))
}

/// Fold arbitrary modifier constructors over a base, left to right
///
/// The open-extension entry point: any constructor with the
/// [`ModifierCtor`] signature participates, catalog member or not.
#[must_use]
pub fn compose_with(
    base: Box<dyn Priced>,
    ctors: impl IntoIterator<Item = ModifierCtor>,
) -> Box<dyn Priced> {
    ctors.into_iter().fold(base, |item, ctor| ctor(item))
}
