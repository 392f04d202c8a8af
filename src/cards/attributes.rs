//! Card attributes: element and rarity.
//!
//! Both are drawn uniformly and independently by the card factory.
//! Display data (names, icons, colors) lives here so renderers never
//! hardcode it.

use serde::{Deserialize, Serialize};

/// One of the six card elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Light,
    Dark,
}

impl Element {
    /// All elements in factory order.
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Wind,
        Element::Earth,
        Element::Light,
        Element::Dark,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Wind => "wind",
            Element::Earth => "earth",
            Element::Light => "light",
            Element::Dark => "dark",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Wind => "Wind",
            Element::Earth => "Earth",
            Element::Light => "Light",
            Element::Dark => "Dark",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Element::Fire => "🔥",
            Element::Water => "💧",
            Element::Wind => "🌪️",
            Element::Earth => "⛰️",
            Element::Light => "✨",
            Element::Dark => "🌑",
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Element::Fire => "#ef4444",
            Element::Water => "#3b82f6",
            Element::Wind => "#22c55e",
            Element::Earth => "#a16207",
            Element::Light => "#fde047",
            Element::Dark => "#6b21a8",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Rarity tier. Higher tiers have higher base attack and defense.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    R = 1,
    SR = 2,
    SSR = 3,
    EX = 4,
}

impl Rarity {
    /// All rarities, lowest tier first.
    pub const ALL: [Rarity; 4] = [Rarity::R, Rarity::SR, Rarity::SSR, Rarity::EX];

    /// Integer tier, 1-4.
    #[must_use]
    pub const fn tier(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::R => "R",
            Rarity::SR => "SR",
            Rarity::SSR => "SSR",
            Rarity::EX => "EX",
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Rarity::R => "#6b7280",
            Rarity::SR => "#3b82f6",
            Rarity::SSR => "#a855f7",
            Rarity::EX => "#eab308",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_keys_are_unique() {
        let mut keys: Vec<_> = Element::ALL.iter().map(|e| e.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 6);
        assert_eq!(format!("{}", Element::Fire), "fire");
    }

    #[test]
    fn test_element_serializes_lowercase() {
        let json = serde_json::to_string(&Element::Water).unwrap();
        assert_eq!(json, "\"water\"");
    }

    #[test]
    fn test_rarity_tiers() {
        assert_eq!(Rarity::R.tier(), 1);
        assert_eq!(Rarity::EX.tier(), 4);
        assert_eq!(Rarity::ALL.map(Rarity::tier), [1, 2, 3, 4]);
        assert_eq!(Rarity::SR.name(), "SR");
    }
}
