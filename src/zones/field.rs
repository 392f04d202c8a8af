//! The field: the last few cards the player played, oldest first.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Rolling window of played cards with FIFO eviction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    cards: SmallVec<[Card; 3]>,
    capacity: usize,
}

impl Field {
    /// Create an empty field holding at most `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            capacity,
        }
    }

    /// Add a card, evicting and returning the oldest if over capacity.
    pub fn push(&mut self, card: Card) -> Option<Card> {
        self.cards.push(card);
        if self.cards.len() > self.capacity {
            Some(self.cards.remove(0))
        } else {
            None
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{generate_card, CardId};
    use crate::core::rng::GameRng;

    fn cards(n: u32) -> Vec<Card> {
        let mut rng = GameRng::new(3);
        (1..=n).map(|i| generate_card(CardId::new(i), &mut rng)).collect()
    }

    #[test]
    fn test_fills_without_eviction() {
        let mut field = Field::new(3);
        for card in cards(3) {
            assert!(field.push(card).is_none());
        }
        assert_eq!(field.len(), 3);
        assert!(field.is_full());
    }

    #[test]
    fn test_fifo_eviction() {
        let mut field = Field::new(3);
        let all = cards(5);
        for card in all.iter().take(3).cloned() {
            field.push(card);
        }

        let evicted = field.push(all[3].clone()).unwrap();
        assert_eq!(evicted.id, CardId::new(1));
        let evicted = field.push(all[4].clone()).unwrap();
        assert_eq!(evicted.id, CardId::new(2));

        let ids: Vec<_> = field.cards().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(field.len(), field.capacity());
    }
}
