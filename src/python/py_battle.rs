//! Battle session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BattleConfig, GameRng, SynergyTiming};
use crate::session::BattleController;

use super::py_core::PyCard;

/// Python wrapper for a battle session.
///
/// Intent methods return `True` when the intent took effect and `False`
/// when it was ignored.
#[pyclass(name = "Battle")]
pub struct PyBattle {
    inner: BattleController<GameRng>,
}

#[pymethods]
impl PyBattle {
    /// Create a new session on the menu.
    ///
    /// # Arguments
    /// - seed: RNG seed; omit for an entropy-seeded game
    /// - deferred_synergy: pay the synergy bonus one turn late
    #[new]
    #[pyo3(signature = (seed = None, deferred_synergy = false))]
    fn new(seed: Option<u64>, deferred_synergy: bool) -> PyResult<Self> {
        let timing = if deferred_synergy {
            SynergyTiming::Deferred
        } else {
            SynergyTiming::Immediate
        };
        let config = BattleConfig::default().with_synergy_timing(timing);
        let inner = match seed {
            Some(seed) => BattleController::seeded(config, seed),
            None => BattleController::new(config),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    fn start_battle(&mut self) -> bool {
        self.inner.start_battle().is_applied()
    }

    fn select_card(&mut self, index: usize) -> bool {
        self.inner.select_card(index).is_applied()
    }

    fn execute_turn(&mut self) -> bool {
        self.inner.execute_turn().is_applied()
    }

    fn return_to_menu(&mut self) -> bool {
        self.inner.return_to_menu().is_applied()
    }

    /// "menu", "battle", "victory" or "gameover".
    #[getter]
    fn phase(&self) -> String {
        self.inner.phase().to_string()
    }

    #[getter]
    fn player_hp(&self) -> Option<u32> {
        self.inner.session().battle().map(|b| b.player_hp)
    }

    #[getter]
    fn enemy_hp(&self) -> Option<u32> {
        self.inner.session().battle().map(|b| b.enemy_hp)
    }

    #[getter]
    fn energy(&self) -> Option<u32> {
        self.inner.session().battle().map(|b| b.energy)
    }

    #[getter]
    fn turn(&self) -> Option<u32> {
        self.inner.session().battle().map(|b| b.turn)
    }

    #[getter]
    fn hand(&self) -> Vec<PyCard> {
        self.inner
            .session()
            .battle()
            .map(|b| b.hand.iter().cloned().map(PyCard).collect())
            .unwrap_or_default()
    }

    #[getter]
    fn field(&self) -> Vec<PyCard> {
        self.inner
            .session()
            .battle()
            .map(|b| b.field.cards().iter().cloned().map(PyCard).collect())
            .unwrap_or_default()
    }

    #[getter]
    fn selected(&self) -> Option<usize> {
        self.inner.session().battle().and_then(|b| b.selected)
    }

    #[getter]
    fn enemy_card(&self) -> Option<PyCard> {
        self.inner
            .session()
            .battle()
            .and_then(|b| b.enemy_card.clone())
            .map(PyCard)
    }

    /// Active synergy element key, if any.
    #[getter]
    fn synergy(&self) -> Option<&'static str> {
        self.inner
            .session()
            .battle()
            .and_then(|b| b.synergy)
            .map(|e| e.key())
    }

    /// Newest line first.
    #[getter]
    fn battle_log(&self) -> Vec<String> {
        self.inner
            .session()
            .battle()
            .map(|b| b.log.lines().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn __repr__(&self) -> String {
        format!("Battle(phase={})", self.inner.phase())
    }
}
