//! Session control for renderers.
//!
//! - `BattleController`: owns the session and accepts intents
//! - `SessionView`, `BattleView`: serializable read-only snapshots
//! - `MenuEntry`, `Reward`: menu and victory screen data

pub mod controller;
pub mod view;

pub use controller::BattleController;
pub use view::{BattleView, MenuEntry, Reward, SessionView, VICTORY_REWARD};
