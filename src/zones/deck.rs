//! Deck generation.
//!
//! A deck is regenerated in full whenever a battle starts. The opponent
//! has no persistent deck: each turn it picks from a fresh throwaway deck.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{generate_card, Card, CardId};
use crate::core::rng::RandomSource;

/// Ordered card list backed by a persistent vector so session clones stay O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Generate `size` cards with ids `1..=size`.
    ///
    /// Ids are `u32`; sizes past `u32::MAX` stop at the last id.
    /// `BattleConfig::validate` rejects such sizes up front.
    pub fn generate<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Self {
        let last = u32::try_from(size).unwrap_or(u32::MAX);
        let cards = (1..=last)
            .map(|id| generate_card(CardId::new(id), rng))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Pick one card uniformly at random.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&Card> {
        if self.cards.is_empty() {
            return None;
        }
        self.cards.get(rng.below(self.cards.len()))
    }

    pub(crate) fn cards(&self) -> &Vector<Card> {
        &self.cards
    }
}

/// Draw the opponent's card for a turn from a freshly generated deck.
pub fn pick_opponent_card<R: RandomSource + ?Sized>(deck_size: usize, rng: &mut R) -> Option<Card> {
    Deck::generate(deck_size, rng).pick(rng).cloned()
}
