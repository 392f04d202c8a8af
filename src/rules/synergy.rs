//! Elemental synergy detection.
//!
//! A synergy holds when some element appears at least `threshold` times
//! on the field. With the standard 3-slot field and threshold of 3 that
//! means all three cards share an element. At most one synergy is active.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Element};

/// Return the element with a synergy on `field`, if any.
///
/// A field shorter than `threshold` never has one. When several elements
/// qualify (only possible with a custom config), the one seen first on
/// the field wins.
#[must_use]
pub fn detect_synergy(field: &[Card], threshold: usize) -> Option<Element> {
    if threshold == 0 || field.len() < threshold {
        return None;
    }

    let mut counts: FxHashMap<Element, usize> = FxHashMap::default();
    for card in field {
        *counts.entry(card.element).or_insert(0) += 1;
    }

    field
        .iter()
        .map(|card| card.element)
        .find(|element| counts[element] >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{card_rolls, generate_card, CardId, Rarity, SkillKind};
    use crate::core::rng::ScriptedRng;

    fn card(id: u32, element: Element) -> Card {
        let rolls = card_rolls(element, Rarity::R, 3, 2, SkillKind::Active, 2).unwrap();
        generate_card(CardId::new(id), &mut ScriptedRng::new(rolls))
    }

    #[test]
    fn test_short_field_has_no_synergy() {
        assert_eq!(detect_synergy(&[], 3), None);
        let field = [card(1, Element::Fire), card(2, Element::Fire)];
        assert_eq!(detect_synergy(&field, 3), None);
    }

    #[test]
    fn test_three_of_a_kind() {
        let field = [card(1, Element::Fire), card(2, Element::Fire), card(3, Element::Fire)];
        assert_eq!(detect_synergy(&field, 3), Some(Element::Fire));
    }

    #[test]
    fn test_mixed_field() {
        let field = [card(1, Element::Fire), card(2, Element::Water), card(3, Element::Fire)];
        assert_eq!(detect_synergy(&field, 3), None);
    }

    #[test]
    fn test_lower_threshold_picks_first_seen() {
        let field = [
            card(1, Element::Dark),
            card(2, Element::Wind),
            card(3, Element::Wind),
            card(4, Element::Dark),
        ];
        assert_eq!(detect_synergy(&field, 2), Some(Element::Dark));
    }

    #[test]
    fn test_zero_threshold_disabled() {
        let field = [card(1, Element::Earth)];
        assert_eq!(detect_synergy(&field, 0), None);
    }
}
