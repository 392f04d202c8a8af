//! Card values.
//!
//! A `Card` is plain data: once generated it never changes. The deck,
//! hand, and field all hold clones of the same values.

use serde::{Deserialize, Serialize};

use super::attributes::{Element, Rarity};

/// Card identifier.
///
/// Unique within one generated deck only. The opponent's throwaway decks
/// reuse the same numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Whether a skill is triggered or always on. Cosmetic only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Active,
    Passive,
}

/// Skill descriptor. Only `cost` affects play: it is the energy debited
/// when the card is played.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    /// Energy cost, 2-4.
    pub cost: u32,
    pub description: String,
}

/// A playable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub element: Element,
    pub rarity: Rarity,
    pub attack: u32,
    pub defense: u32,
    /// Always 1.
    pub level: u32,
    /// Always 1.
    pub star: u32,
    pub skill: Skill,
}

impl Card {
    /// Energy needed to play this card.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.skill.cost
    }

    /// Can this card be played with `energy` available?
    #[must_use]
    pub fn is_affordable(&self, energy: u32) -> bool {
        self.cost() <= energy
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} {}] ATK {} DEF {} cost {}",
            self.name,
            self.rarity,
            self.element.name(),
            self.attack,
            self.defense,
            self.skill.cost
        )
    }
}
