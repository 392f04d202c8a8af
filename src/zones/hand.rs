//! Hand drawing.
//!
//! Each draw samples from a working copy of the deck, so the deck itself
//! never shrinks and a card can show up again in a later hand.

use log::debug;
use smallvec::SmallVec;

use super::deck::Deck;
use crate::cards::Card;
use crate::core::rng::RandomSource;

/// Cards currently in hand. Inline for the standard five.
pub type Hand = SmallVec<[Card; 5]>;

/// Draw up to `size` distinct cards from `deck` without replacement.
///
/// Returns fewer than `size` cards only when the deck is smaller.
pub fn draw_hand<R: RandomSource + ?Sized>(deck: &Deck, size: usize, rng: &mut R) -> Hand {
    let mut available = deck.cards().clone();
    let mut hand = Hand::new();

    while hand.len() < size && !available.is_empty() {
        let index = rng.below(available.len());
        hand.push(available.remove(index));
    }

    debug!(
        "Drew hand: {:?}",
        hand.iter().map(|c| c.id.raw()).collect::<Vec<_>>()
    );
    hand
}
