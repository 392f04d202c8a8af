//! Read-only snapshots for renderers.
//!
//! A renderer gets everything it draws from `SessionView` and never
//! touches `Session` itself. Snapshots serialize to JSON for web front ends.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Element};
use crate::core::config::BattleConfig;
use crate::core::state::{BattleState, Phase, Session};

/// Main menu buttons. Only `Battle` does anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuEntry {
    Battle,
    Adventure,
    Ranking,
    Settings,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::Battle,
        MenuEntry::Adventure,
        MenuEntry::Ranking,
        MenuEntry::Settings,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MenuEntry::Battle => "Start Battle",
            MenuEntry::Adventure => "Adventure Mode",
            MenuEntry::Ranking => "Ranking",
            MenuEntry::Settings => "Settings",
        }
    }

    /// Whether choosing this entry has any effect.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, MenuEntry::Battle)
    }
}

/// Victory payout. Shown only; nothing is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub experience: u32,
    pub coins: u32,
}

pub const VICTORY_REWARD: Reward = Reward {
    experience: 100,
    coins: 50,
};

/// Battle screen data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleView {
    pub turn: u32,
    pub player_hp: u32,
    pub enemy_hp: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub hand: Vec<Card>,
    /// Parallel to `hand`: can the card be selected right now?
    pub playable: Vec<bool>,
    pub selected: Option<usize>,
    pub field: Vec<Card>,
    pub synergy: Option<Element>,
    pub enemy_card: Option<Card>,
    /// Newest first.
    pub log: Vec<String>,
}

impl BattleView {
    fn capture(battle: &BattleState, config: &BattleConfig) -> Self {
        Self {
            turn: battle.turn,
            player_hp: battle.player_hp,
            enemy_hp: battle.enemy_hp,
            max_health: config.max_health,
            energy: battle.energy,
            max_energy: config.max_energy,
            hand: battle.hand.to_vec(),
            playable: battle
                .hand
                .iter()
                .map(|card| card.is_affordable(battle.energy))
                .collect(),
            selected: battle.selected,
            field: battle.field.cards().to_vec(),
            synergy: battle.synergy,
            enemy_card: battle.enemy_card.clone(),
            log: battle.log.lines().map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|index| self.hand.get(index))
    }
}

/// Everything a renderer needs for the current screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    /// Menu buttons, on the menu screen only.
    pub menu: Vec<MenuEntry>,
    /// Present outside the menu.
    pub battle: Option<BattleView>,
    /// Present on the victory screen.
    pub reward: Option<Reward>,
}

impl SessionView {
    /// Snapshot `session` under `config`.
    #[must_use]
    pub fn capture(session: &Session, config: &BattleConfig) -> Self {
        Self {
            phase: session.phase,
            menu: if session.phase == Phase::Menu {
                MenuEntry::ALL.to_vec()
            } else {
                Vec::new()
            },
            battle: session
                .battle()
                .map(|battle| BattleView::capture(battle, config)),
            reward: (session.phase == Phase::Victory).then_some(VICTORY_REWARD),
        }
    }
}
