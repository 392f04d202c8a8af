//! Session state.
//!
//! ## Session
//!
//! The single owned value behind a game screen: the current `Phase` plus,
//! outside the menu, the `BattleState` of the running battle.
//!
//! ## BattleState
//!
//! Everything a battle needs:
//! - Health totals and energy
//! - Turn counter (starts at 1)
//! - Deck, hand, field
//! - Active synergy and the battle log
//! - Selected hand index and the opponent's last card
//!
//! Battle state is created on `StartBattle` and dropped on `ReturnToMenu`.
//! It stays readable on the victory and defeat screens.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BattleConfig;
use crate::cards::{Card, Element};
use crate::zones::{Deck, Field, Hand};

/// Screen-level game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Menu,
    Battle,
    Victory,
    GameOver,
}

impl Phase {
    /// Victory and defeat accept no further turns.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Victory | Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Menu => "menu",
            Phase::Battle => "battle",
            Phase::Victory => "victory",
            Phase::GameOver => "gameover",
        };
        f.write_str(name)
    }
}

/// Battle log, newest line first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    lines: Vector<String>,
    capacity: usize,
}

impl BattleLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Vector::new(),
            capacity,
        }
    }

    /// Put an entry in front of the log, keeping its line order, then drop
    /// the oldest lines beyond capacity.
    pub fn record<I>(&mut self, entry: I)
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: DoubleEndedIterator,
    {
        for line in entry.into_iter().rev() {
            self.lines.push_front(line);
        }
        if self.lines.len() > self.capacity {
            self.lines.truncate(self.capacity);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.lines.front().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// State of a running (or just finished) battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub player_hp: u32,
    pub enemy_hp: u32,
    pub energy: u32,
    /// Turn number (starts at 1).
    pub turn: u32,
    pub deck: Deck,
    pub hand: Hand,
    pub field: Field,
    pub synergy: Option<Element>,
    pub log: BattleLog,
    /// Index into `hand`.
    pub selected: Option<usize>,
    /// Opponent card from the last resolved turn.
    pub enemy_card: Option<Card>,
}

impl BattleState {
    /// Fresh battle with full health and starting energy.
    #[must_use]
    pub fn new(config: &BattleConfig, deck: Deck, hand: Hand) -> Self {
        Self {
            player_hp: config.max_health,
            enemy_hp: config.max_health,
            energy: config.starting_energy,
            turn: 1,
            deck,
            hand,
            field: Field::new(config.field_size),
            synergy: None,
            log: BattleLog::new(config.log_capacity),
            selected: None,
            enemy_card: None,
        }
    }

    /// The selected hand card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|index| self.hand.get(index))
    }
}

/// Owned session: phase plus the battle in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub phase: Phase,
    pub battle: Option<BattleState>,
}

impl Session {
    /// A session sitting on the menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }
}
