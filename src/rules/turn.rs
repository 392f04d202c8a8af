//! Turn resolution.
//!
//! One turn is a single clash: the player's selected card against one
//! opponent card. Both sides deal `max(0, attack - defense)`; the player
//! adds the synergy bonus when one applies. Random parts (opponent pick,
//! hand redraw) happen in the rules engine so this stays deterministic.

use log::info;
use serde::{Deserialize, Serialize};

use super::outcome::{evaluate, BattleResult};
use super::synergy::detect_synergy;
use crate::cards::{Card, Element};
use crate::core::config::{BattleConfig, SynergyTiming};
use crate::core::state::BattleState;

/// What happened during one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn number the clash happened on.
    pub turn: u32,
    pub player_card: Card,
    pub enemy_card: Card,
    /// Damage to the opponent, bonus included.
    pub damage_dealt: u32,
    pub damage_taken: u32,
    /// Bonus part of `damage_dealt` (0 without synergy).
    pub synergy_bonus: u32,
    /// Synergy active after the turn.
    pub synergy: Option<Element>,
    /// Card pushed off the field, if the field was full.
    pub evicted: Option<Card>,
    pub result: Option<BattleResult>,
}

/// Damage `attacker` deals to `defender`. Never negative.
#[must_use]
pub fn clash_damage(attacker: &Card, defender: &Card) -> u32 {
    attacker.attack.saturating_sub(defender.defense)
}

/// Resolve a clash between `played` and `enemy`.
///
/// Debits the card cost, places `played` on the field, applies damage,
/// logs the turn, advances the turn counter, regenerates energy, and
/// clears the selection. Does not redraw the hand or change the phase.
pub fn resolve_turn(
    battle: &mut BattleState,
    config: &BattleConfig,
    played: Card,
    enemy: Card,
) -> TurnReport {
    battle.energy = battle.energy.saturating_sub(played.cost());

    let previous_synergy = battle.synergy;
    let evicted = battle.field.push(played.clone());
    let synergy = detect_synergy(battle.field.cards(), config.synergy_threshold);
    battle.synergy = synergy;

    let bonus_applies = match config.synergy_timing {
        SynergyTiming::Immediate => synergy.is_some(),
        SynergyTiming::Deferred => previous_synergy.is_some(),
    };
    let synergy_bonus = if bonus_applies { config.synergy_bonus } else { 0 };

    let damage_dealt = clash_damage(&played, &enemy).saturating_add(synergy_bonus);
    let damage_taken = clash_damage(&enemy, &played);

    battle.enemy_hp = battle.enemy_hp.saturating_sub(damage_dealt);
    battle.player_hp = battle.player_hp.saturating_sub(damage_taken);

    let turn = battle.turn;
    battle.log.record([
        format!("Turn {}: {} vs {}", turn, played.name, enemy.name),
        format!(
            "Player attack: {} damage{}",
            damage_dealt,
            if synergy_bonus > 0 { " (Synergy!)" } else { "" }
        ),
        format!("Enemy attack: {} damage", damage_taken),
    ]);

    if let Some(element) = synergy.filter(|&e| Some(e) != previous_synergy) {
        info!("{} synergy active", element.name());
    }
    info!(
        "Turn {}: {} dealt {}, took {} (hp {} / enemy {})",
        turn, played.name, damage_dealt, damage_taken, battle.player_hp, battle.enemy_hp
    );

    battle.turn += 1;
    battle.energy = battle.energy.saturating_add(config.energy_regen).min(config.max_energy);
    battle.selected = None;
    battle.enemy_card = Some(enemy.clone());

    TurnReport {
        turn,
        player_card: played,
        enemy_card: enemy,
        damage_dealt,
        damage_taken,
        synergy_bonus,
        synergy,
        evicted,
        result: evaluate(battle.player_hp, battle.enemy_hp),
    }
}
