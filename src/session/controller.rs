//! Battle controller: the one owner of session state.
//!
//! Renderers hold a `BattleController`, send it intents, and read back a
//! `SessionView`. Every intent goes through `RulesEngine::transition`, so
//! an ignored intent can never leave a half-applied session behind.
//!
//! ```
//! use card_battle::core::{BattleConfig, Phase};
//! use card_battle::session::BattleController;
//!
//! let mut game = BattleController::seeded(BattleConfig::default(), 42).unwrap();
//! game.start_battle();
//! assert_eq!(game.phase(), Phase::Battle);
//!
//! game.select_card(0);
//! let report = game.execute_turn();
//! assert!(report.report().is_some());
//! assert_eq!(game.view().battle.unwrap().turn, 2);
//! ```

use log::debug;

use super::view::SessionView;
use crate::core::action::Intent;
use crate::core::config::{BattleConfig, ConfigError};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{Phase, Session};
use crate::rules::{BattleResult, BattleRules, Dispatch, RulesEngine};

/// Owns the session, the rules, and the random source.
#[derive(Clone, Debug)]
pub struct BattleController<R = GameRng> {
    rules: BattleRules,
    session: Session,
    rng: R,
}

impl BattleController<GameRng> {
    /// Controller with an entropy-seeded random source.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Controller with a reproducible random source.
    pub fn seeded(config: BattleConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> BattleController<R> {
    /// Controller drawing randomness from `rng`.
    pub fn with_rng(config: BattleConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: BattleRules::new(config)?,
            session: Session::new(),
            rng,
        })
    }

    /// Apply an intent. Ignored intents leave the session unchanged.
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        let (next, dispatch) = self.rules.transition(&self.session, intent, &mut self.rng);
        if dispatch.is_applied() {
            self.session = next;
        } else {
            debug!("Ignored {} in {}", intent, self.session.phase);
        }
        dispatch
    }

    pub fn start_battle(&mut self) -> Dispatch {
        self.dispatch(Intent::StartBattle)
    }

    pub fn select_card(&mut self, index: usize) -> Dispatch {
        self.dispatch(Intent::SelectCard(index))
    }

    pub fn execute_turn(&mut self) -> Dispatch {
        self.dispatch(Intent::ExecuteTurn)
    }

    pub fn return_to_menu(&mut self) -> Dispatch {
        self.dispatch(Intent::ReturnToMenu)
    }

    // === Read API ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.rules.is_terminal(&self.session)
    }

    #[must_use]
    pub fn legal_intents(&self) -> Vec<Intent> {
        self.rules.legal_intents(&self.session)
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::capture(&self.session, self.rules.config())
    }
}
