//! Core engine types: random source, configuration, state, intents.
//!
//! Nothing in here knows how a turn is resolved. The `rules` module
//! drives these types; renderers only read them.

pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{BattleConfig, ConfigError, SynergyTiming};
pub use action::Intent;
pub use state::{BattleLog, BattleState, Phase, Session};
