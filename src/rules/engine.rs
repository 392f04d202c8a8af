//! Rules engine trait.
//!
//! The engine turns intents into state changes:
//! - Which intents would take effect right now
//! - How an intent changes the session
//! - Whether the battle is over
//!
//! Every call either applies an intent fully or leaves the session
//! untouched and reports `Dispatch::Ignored`.

use crate::core::action::Intent;
use crate::core::config::BattleConfig;
use crate::core::rng::RandomSource;
use crate::core::state::Session;

use super::outcome::BattleResult;
use super::turn::TurnReport;

/// What an intent did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Not applicable in the current state; nothing changed.
    Ignored,
    BattleStarted,
    CardSelected(usize),
    TurnResolved(TurnReport),
    ReturnedToMenu,
}

impl Dispatch {
    /// Did the intent change the session?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Dispatch::Ignored)
    }

    /// The turn report, for a resolved turn.
    #[must_use]
    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            Dispatch::TurnResolved(report) => Some(report),
            _ => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_intents`: only intents that `apply_intent` would not ignore
/// - `apply_intent`: all randomness comes from `rng`
/// - `is_terminal`: `None` while on the menu or mid-battle
pub trait RulesEngine {
    /// Get the battle configuration.
    fn config(&self) -> &BattleConfig;

    /// Intents that would take effect in `session`.
    fn legal_intents(&self, session: &Session) -> Vec<Intent>;

    /// Apply an intent in place.
    fn apply_intent<R: RandomSource + ?Sized>(
        &self,
        session: &mut Session,
        intent: Intent,
        rng: &mut R,
    ) -> Dispatch;

    /// Result of a finished battle.
    fn is_terminal(&self, session: &Session) -> Option<BattleResult>;

    // === Convenience Methods ===

    /// Pure transition: the session that results from `intent`.
    fn transition<R: RandomSource + ?Sized>(
        &self,
        session: &Session,
        intent: Intent,
        rng: &mut R,
    ) -> (Session, Dispatch) {
        let mut next = session.clone();
        let dispatch = self.apply_intent(&mut next, intent, rng);
        (next, dispatch)
    }

    /// Is `intent` currently legal?
    fn is_legal(&self, session: &Session, intent: Intent) -> bool {
        self.legal_intents(session).contains(&intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_is_applied() {
        assert!(!Dispatch::Ignored.is_applied());
        assert!(Dispatch::BattleStarted.is_applied());
        assert!(Dispatch::CardSelected(0).is_applied());
        assert!(Dispatch::ReturnedToMenu.report().is_none());
    }
}
