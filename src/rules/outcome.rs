//! Outcome evaluation.

use serde::{Deserialize, Serialize};

use crate::core::state::Phase;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    Victory,
    Defeat,
}

impl BattleResult {
    /// The terminal phase this result moves the session to.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            BattleResult::Victory => Phase::Victory,
            BattleResult::Defeat => Phase::GameOver,
        }
    }

    /// Result shown by a terminal phase.
    #[must_use]
    pub fn from_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Victory => Some(BattleResult::Victory),
            Phase::GameOver => Some(BattleResult::Defeat),
            Phase::Menu | Phase::Battle => None,
        }
    }
}

/// Decide the battle after a health change.
///
/// The player's health is checked first, so a double knockout is a defeat.
#[must_use]
pub fn evaluate(player_hp: u32, enemy_hp: u32) -> Option<BattleResult> {
    if player_hp == 0 {
        Some(BattleResult::Defeat)
    } else if enemy_hp == 0 {
        Some(BattleResult::Victory)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_alive() {
        assert_eq!(evaluate(1, 1), None);
        assert_eq!(evaluate(50, 50), None);
    }

    #[test]
    fn test_enemy_down() {
        assert_eq!(evaluate(12, 0), Some(BattleResult::Victory));
    }

    #[test]
    fn test_player_down() {
        assert_eq!(evaluate(0, 30), Some(BattleResult::Defeat));
    }

    #[test]
    fn test_double_knockout_is_defeat() {
        assert_eq!(evaluate(0, 0), Some(BattleResult::Defeat));
    }

    #[test]
    fn test_phase_mapping() {
        assert_eq!(BattleResult::Victory.phase(), Phase::Victory);
        assert_eq!(BattleResult::Defeat.phase(), Phase::GameOver);
        assert_eq!(BattleResult::from_phase(Phase::GameOver), Some(BattleResult::Defeat));
        assert_eq!(BattleResult::from_phase(Phase::Battle), None);
    }
}
