//! The card battle rules.
//!
//! Phase flow: `Menu -> Battle -> {Victory, GameOver} -> Menu`.
//! Inside `Battle` each turn is draw, select, resolve, evaluate.

use log::{debug, info};

use super::engine::{Dispatch, RulesEngine};
use super::outcome::BattleResult;
use super::turn::resolve_turn;
use crate::core::action::Intent;
use crate::core::config::{BattleConfig, ConfigError};
use crate::core::rng::RandomSource;
use crate::core::state::{BattleState, Phase, Session};
use crate::zones::{draw_hand, pick_opponent_card, Deck};

/// Rules for one configured card battle.
#[derive(Clone, Debug, Default)]
pub struct BattleRules {
    config: BattleConfig,
}

impl BattleRules {
    /// Validate `config` and build the rules around it.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn start_battle<R: RandomSource + ?Sized>(&self, session: &mut Session, rng: &mut R) -> Dispatch {
        if session.phase != Phase::Menu {
            return Dispatch::Ignored;
        }

        let deck = Deck::generate(self.config.deck_size, rng);
        let hand = draw_hand(&deck, self.config.hand_size, rng);
        session.battle = Some(BattleState::new(&self.config, deck, hand));
        session.phase = Phase::Battle;

        info!(
            "Battle started: {} hp each, {} energy",
            self.config.max_health, self.config.starting_energy
        );
        Dispatch::BattleStarted
    }

    fn select_card(&self, session: &mut Session, index: usize) -> Dispatch {
        if session.phase != Phase::Battle {
            return Dispatch::Ignored;
        }
        let Some(battle) = session.battle.as_mut() else {
            return Dispatch::Ignored;
        };

        match battle.hand.get(index) {
            Some(card) if card.is_affordable(battle.energy) => {
                debug!("Selected {} (cost {})", card.name, card.cost());
                battle.selected = Some(index);
                Dispatch::CardSelected(index)
            }
            Some(card) => {
                debug!(
                    "Cannot afford {}: cost {}, energy {}",
                    card.name,
                    card.cost(),
                    battle.energy
                );
                Dispatch::Ignored
            }
            None => Dispatch::Ignored,
        }
    }

    fn execute_turn<R: RandomSource + ?Sized>(&self, session: &mut Session, rng: &mut R) -> Dispatch {
        if session.phase != Phase::Battle {
            return Dispatch::Ignored;
        }
        let Some(battle) = session.battle.as_mut() else {
            return Dispatch::Ignored;
        };
        let Some(played) = battle
            .selected_card()
            .filter(|card| card.is_affordable(battle.energy))
            .cloned()
        else {
            debug!("Execute ignored: no playable selection");
            return Dispatch::Ignored;
        };
        let Some(enemy) = pick_opponent_card(self.config.deck_size, rng) else {
            return Dispatch::Ignored;
        };

        let report = resolve_turn(battle, &self.config, played, enemy);
        battle.hand = draw_hand(&battle.deck, self.config.hand_size, rng);

        if let Some(result) = report.result {
            info!("Battle over on turn {}: {:?}", report.turn, result);
            session.phase = result.phase();
        }
        Dispatch::TurnResolved(report)
    }

    fn return_to_menu(&self, session: &mut Session) -> Dispatch {
        if !session.phase.is_terminal() {
            return Dispatch::Ignored;
        }
        session.battle = None;
        session.phase = Phase::Menu;
        info!("Returned to menu");
        Dispatch::ReturnedToMenu
    }
}

impl RulesEngine for BattleRules {
    fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn legal_intents(&self, session: &Session) -> Vec<Intent> {
        match session.phase {
            Phase::Menu => vec![Intent::StartBattle],
            Phase::Victory | Phase::GameOver => vec![Intent::ReturnToMenu],
            Phase::Battle => {
                let Some(battle) = session.battle() else {
                    return vec![];
                };
                let mut intents: Vec<Intent> = battle
                    .hand
                    .iter()
                    .enumerate()
                    .filter(|(_, card)| card.is_affordable(battle.energy))
                    .map(|(index, _)| Intent::SelectCard(index))
                    .collect();
                if battle.selected_card().is_some() {
                    intents.push(Intent::ExecuteTurn);
                }
                intents
            }
        }
    }

    fn apply_intent<R: RandomSource + ?Sized>(
        &self,
        session: &mut Session,
        intent: Intent,
        rng: &mut R,
    ) -> Dispatch {
        match intent {
            Intent::StartBattle => self.start_battle(session, rng),
            Intent::SelectCard(index) => self.select_card(session, index),
            Intent::ExecuteTurn => self.execute_turn(session, rng),
            Intent::ReturnToMenu => self.return_to_menu(session),
        }
    }

    fn is_terminal(&self, session: &Session) -> Option<BattleResult> {
        BattleResult::from_phase(session.phase)
    }
}
