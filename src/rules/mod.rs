//! Battle rules: synergy detection, turn resolution, outcome evaluation.
//!
//! `BattleRules` implements `RulesEngine`, which maps an `Intent` onto the
//! session. The pieces it composes are usable on their own:
//! `detect_synergy`, `resolve_turn`, and `evaluate`.

pub mod battle;
pub mod engine;
pub mod outcome;
pub mod synergy;
pub mod turn;

pub use battle::BattleRules;
pub use engine::{Dispatch, RulesEngine};
pub use outcome::{evaluate, BattleResult};
pub use synergy::detect_synergy;
pub use turn::{clash_damage, resolve_turn, TurnReport};
