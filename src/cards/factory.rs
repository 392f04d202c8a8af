//! Card factory.
//!
//! Rolls, in order: element, rarity, attack spread, defense spread, skill
//! kind, skill cost. `ScriptedRng` scripts rely on this order.
//!
//! ```
//! use card_battle::cards::{generate_card, CardId};
//! use card_battle::core::GameRng;
//!
//! let mut rng = GameRng::new(1);
//! let card = generate_card(CardId::new(3), &mut rng);
//! let tier = card.rarity.tier();
//! assert!((3 * tier..=3 * tier + 4).contains(&card.attack));
//! assert!((2 * tier..=2 * tier + 3).contains(&card.defense));
//! ```

use super::attributes::{Element, Rarity};
use super::definition::{Card, CardId, Skill, SkillKind};
use crate::core::rng::RandomSource;

/// Attack is `3 * tier + [0, ATTACK_SPREAD)`.
pub const ATTACK_SPREAD: usize = 5;
/// Defense is `2 * tier + [0, DEFENSE_SPREAD)`.
pub const DEFENSE_SPREAD: usize = 4;
/// Cheapest skill cost.
pub const MIN_SKILL_COST: u32 = 2;
/// Most expensive skill cost.
pub const MAX_SKILL_COST: u32 = 4;

/// Generate a random card. `id` only feeds the card's id and name.
pub fn generate_card<R: RandomSource + ?Sized>(id: CardId, rng: &mut R) -> Card {
    let element = Element::ALL[rng.below(Element::ALL.len())];
    let rarity = Rarity::ALL[rng.below(Rarity::ALL.len())];
    let attack = rarity.tier() * 3 + rng.below(ATTACK_SPREAD) as u32;
    let defense = rarity.tier() * 2 + rng.below(DEFENSE_SPREAD) as u32;
    let kind = if rng.coin() {
        SkillKind::Active
    } else {
        SkillKind::Passive
    };
    let cost_span = (MAX_SKILL_COST - MIN_SKILL_COST + 1) as usize;
    let cost = MIN_SKILL_COST + rng.below(cost_span) as u32;

    Card {
        id,
        name: format!("Card {}", id.raw()),
        element,
        rarity,
        attack,
        defense,
        level: 1,
        star: 1,
        skill: Skill {
            name: "Skill".to_string(),
            kind,
            cost,
            description: "Additional effect".to_string(),
        },
    }
}

/// The six rolls that make `generate_card` produce exactly this card.
///
/// Returns `None` when the stats are out of range for the rarity.
#[must_use]
pub fn card_rolls(
    element: Element,
    rarity: Rarity,
    attack: u32,
    defense: u32,
    kind: SkillKind,
    cost: u32,
) -> Option<[usize; 6]> {
    let element_roll = Element::ALL.iter().position(|&e| e == element)?;
    let rarity_roll = Rarity::ALL.iter().position(|&r| r == rarity)?;
    let attack_roll = attack.checked_sub(rarity.tier() * 3)? as usize;
    let defense_roll = defense.checked_sub(rarity.tier() * 2)? as usize;
    let cost_roll = cost.checked_sub(MIN_SKILL_COST)? as usize;
    if attack_roll >= ATTACK_SPREAD || defense_roll >= DEFENSE_SPREAD || cost > MAX_SKILL_COST {
        return None;
    }
    let kind_roll = match kind {
        SkillKind::Active => 1,
        SkillKind::Passive => 0,
    };
    Some([element_roll, rarity_roll, attack_roll, defense_roll, kind_roll, cost_roll])
}
