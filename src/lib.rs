//! # card-battle
//!
//! Rules engine for a single-screen elemental card battle: a menu, a
//! turn-based battle against a randomly acting opponent, and win/lose
//! screens.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `Session` value holds everything. It changes
//!    only through `Intent`s applied by the rules.
//!
//! 2. **Invalid Intent Is a No-op**: Selecting an unaffordable card or
//!    executing with nothing selected is ignored, never an error.
//!
//! 3. **Injectable Randomness**: Every random decision goes through
//!    `RandomSource`, so tests can script exact cards.
//!
//! ## Modules
//!
//! - `core`: Random source, configuration, state, intents
//! - `cards`: Elements, rarities, card values, card factory
//! - `zones`: Deck, hand drawing, field
//! - `rules`: Synergy, turn resolution, outcome, `RulesEngine`
//! - `session`: `BattleController` and renderer snapshots

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, ConfigError, SynergyTiming,
    GameRng, RandomSource, ScriptedRng,
    Intent, BattleLog, BattleState, Phase, Session,
};

pub use crate::cards::{Card, CardId, Element, Rarity, Skill, SkillKind, generate_card};

pub use crate::zones::{Deck, Field, Hand, draw_hand};

pub use crate::rules::{
    BattleResult, BattleRules, Dispatch, RulesEngine, TurnReport,
    detect_synergy, evaluate, resolve_turn,
};

pub use crate::session::{BattleController, BattleView, MenuEntry, Reward, SessionView};
