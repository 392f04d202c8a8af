//! Python bindings for driving a battle from an external renderer.
//!
//! # Quick Start
//!
//! ```python
//! import card_battle as cb
//!
//! game = cb.Battle(seed=42)
//! game.start_battle()
//! game.select_card(0)
//! game.execute_turn()
//!
//! print(game.phase, game.player_hp, game.enemy_hp)
//! for line in game.battle_log:
//!     print(line)
//! ```

use pyo3::prelude::*;

mod py_battle;
mod py_core;

pub use py_battle::*;
pub use py_core::*;

/// card_battle: an elemental card-battle rules engine.
#[pymodule]
fn card_battle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyBattle>()?;
    Ok(())
}
