//! Battle configuration.
//!
//! `BattleConfig::default()` is the shipped game: 50 health on both sides,
//! 10 starting energy capped at 20 with +5 per turn, a 30-card deck, a
//! 5-card hand, and a 3-slot field that grants +5 damage when all three
//! cards share an element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// When the elemental synergy bonus is decided for a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynergyTiming {
    /// Check the field after the played card lands.
    #[default]
    Immediate,
    /// Use the synergy left active by the previous turn, then refresh it.
    Deferred,
}

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max health must be positive")]
    ZeroHealth,
    #[error("starting energy {start} exceeds max energy {max}")]
    EnergyAboveCap { start: u32, max: u32 },
    #[error("{0} must be at least 1")]
    EmptyZone(&'static str),
    #[error("synergy threshold {threshold} cannot be reached on a field of {field_size}")]
    UnreachableSynergy { threshold: usize, field_size: usize },
    #[error("deck size {0} exceeds the card id range")]
    DeckTooLarge(usize),
}

/// Tunable battle constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Starting and maximum health for both combatants.
    pub max_health: u32,

    /// Energy at the start of a battle.
    pub starting_energy: u32,

    /// Energy cap.
    pub max_energy: u32,

    /// Energy gained after each resolved turn.
    pub energy_regen: u32,

    /// Cards generated into a deck.
    pub deck_size: usize,

    /// Cards drawn into each hand.
    pub hand_size: usize,

    /// Played cards kept on the field.
    pub field_size: usize,

    /// Same-element cards needed on the field for a synergy.
    pub synergy_threshold: usize,

    /// Flat damage added to the player's attack while a synergy holds.
    pub synergy_bonus: u32,

    /// Battle log lines kept, newest first.
    pub log_capacity: usize,

    pub synergy_timing: SynergyTiming,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_health: 50,
            starting_energy: 10,
            max_energy: 20,
            energy_regen: 5,
            deck_size: 30,
            hand_size: 5,
            field_size: 3,
            synergy_threshold: 3,
            synergy_bonus: 5,
            log_capacity: 5,
            synergy_timing: SynergyTiming::Immediate,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_health(mut self, health: u32) -> Self {
        self.max_health = health;
        self
    }

    #[must_use]
    pub fn with_energy(mut self, starting: u32, max: u32, regen: u32) -> Self {
        self.starting_energy = starting;
        self.max_energy = max;
        self.energy_regen = regen;
        self
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set field size and the synergy threshold together.
    #[must_use]
    pub fn with_field(mut self, field_size: usize, synergy_threshold: usize) -> Self {
        self.field_size = field_size;
        self.synergy_threshold = synergy_threshold;
        self
    }

    #[must_use]
    pub fn with_synergy_bonus(mut self, bonus: u32) -> Self {
        self.synergy_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_synergy_timing(mut self, timing: SynergyTiming) -> Self {
        self.synergy_timing = timing;
        self
    }

    /// Check that a battle can be played with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        if self.starting_energy > self.max_energy {
            return Err(ConfigError::EnergyAboveCap {
                start: self.starting_energy,
                max: self.max_energy,
            });
        }
        for (name, size) in [
            ("deck size", self.deck_size),
            ("hand size", self.hand_size),
            ("field size", self.field_size),
            ("log capacity", self.log_capacity),
            ("synergy threshold", self.synergy_threshold),
        ] {
            if size == 0 {
                return Err(ConfigError::EmptyZone(name));
            }
        }
        if u32::try_from(self.deck_size).is_err() {
            return Err(ConfigError::DeckTooLarge(self.deck_size));
        }
        if self.synergy_threshold > self.field_size {
            return Err(ConfigError::UnreachableSynergy {
                threshold: self.synergy_threshold,
                field_size: self.field_size,
            });
        }
        Ok(())
    }
}
