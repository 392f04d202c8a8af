//! Helpers for scripting exact battles with `ScriptedRng`.

#![allow(dead_code)]

use card_battle::cards::{card_rolls, Element, Rarity, SkillKind};
use card_battle::core::{BattleConfig, ScriptedRng};
use card_battle::session::BattleController;

/// Rolls that make the factory emit one specific card.
pub fn card(element: Element, rarity: Rarity, attack: u32, defense: u32, cost: u32) -> [usize; 6] {
    card_rolls(element, rarity, attack, defense, SkillKind::Active, cost)
        .expect("stats must be legal for the rarity")
}

/// Builds the roll sequence for a whole scripted battle.
#[derive(Default)]
pub struct Script {
    rolls: Vec<usize>,
    deck_size: usize,
    hand_size: usize,
}

impl Script {
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            rolls: Vec::new(),
            deck_size: config.deck_size,
            hand_size: config.hand_size,
        }
    }

    /// Player deck where card `i` uses `cards[i % cards.len()]`, then a
    /// hand of the first cards.
    pub fn start(mut self, cards: &[[usize; 6]]) -> Self {
        self.push_deck(cards);
        self.push_hand();
        self
    }

    /// Opponent deck of `enemy` cards, the pick, and the redraw.
    pub fn turn(mut self, enemy: [usize; 6]) -> Self {
        self.push_deck(&[enemy]);
        self.rolls.push(0);
        self.push_hand();
        self
    }

    pub fn turns(mut self, enemy: [usize; 6], count: usize) -> Self {
        for _ in 0..count {
            self = self.turn(enemy);
        }
        self
    }

    pub fn build(self) -> ScriptedRng {
        ScriptedRng::new(self.rolls)
    }

    fn push_deck(&mut self, cards: &[[usize; 6]]) {
        for i in 0..self.deck_size {
            self.rolls.extend(cards[i % cards.len()]);
        }
    }

    fn push_hand(&mut self) {
        // Roll 0 takes the first remaining card, so the hand is cards 1..=5.
        self.rolls.extend(std::iter::repeat(0).take(self.hand_size));
    }
}

pub fn controller(config: BattleConfig, script: Script) -> BattleController<ScriptedRng> {
    BattleController::with_rng(config, script.build()).expect("valid config")
}
