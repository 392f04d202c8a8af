//! User intents.
//!
//! The renderer never mutates session state directly. It sends one of
//! these, and the rules decide whether it takes effect. An intent that
//! does not apply in the current phase is ignored.

use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Leave the menu and begin a fresh battle.
    StartBattle,
    /// Select the hand card at this index. Requires enough energy.
    SelectCard(usize),
    /// Play the selected card against a random opponent card.
    ExecuteTurn,
    /// Leave a victory or defeat screen.
    ReturnToMenu,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::StartBattle => write!(f, "StartBattle"),
            Intent::SelectCard(index) => write!(f, "SelectCard({})", index),
            Intent::ExecuteTurn => write!(f, "ExecuteTurn"),
            Intent::ReturnToMenu => write!(f, "ReturnToMenu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Intent::SelectCard(2).to_string(), "SelectCard(2)");
        assert_eq!(Intent::ExecuteTurn.to_string(), "ExecuteTurn");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Intent::SelectCard(4)).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Intent::SelectCard(4));
    }
}
