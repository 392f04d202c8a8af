//! Property tests for the battle invariants.
//!
//! Random seeds and random intent streams; every step is checked against
//! the clamping, capacity, and ordering rules.

use proptest::prelude::*;

use card_battle::cards::{generate_card, CardId, Element};
use card_battle::core::{BattleConfig, GameRng, Intent, Phase, SynergyTiming};
use card_battle::rules::Dispatch;
use card_battle::session::BattleController;
use card_battle::zones::{draw_hand, Deck};

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        1 => Just(Intent::StartBattle),
        4 => (0usize..7).prop_map(Intent::SelectCard),
        4 => Just(Intent::ExecuteTurn),
        1 => Just(Intent::ReturnToMenu),
    ]
}

fn timing_strategy() -> impl Strategy<Value = SynergyTiming> {
    prop_oneof![Just(SynergyTiming::Immediate), Just(SynergyTiming::Deferred)]
}

proptest! {
    #[test]
    fn prop_generated_cards_in_bounds(seed in any::<u64>(), id in 1u32..1000) {
        let mut rng = GameRng::new(seed);
        let card = generate_card(CardId::new(id), &mut rng);
        let tier = card.rarity.tier();

        prop_assert!((1..=4).contains(&tier));
        prop_assert!(card.attack >= 3 * tier && card.attack <= 3 * tier + 4);
        prop_assert!(card.defense >= 2 * tier && card.defense <= 2 * tier + 3);
        prop_assert!(Element::ALL.contains(&card.element));
        prop_assert!((2..=4).contains(&card.skill.cost));
    }

    #[test]
    fn prop_hand_is_distinct_and_bounded(
        seed in any::<u64>(),
        deck_size in 0usize..40,
        hand_size in 1usize..8,
    ) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::generate(deck_size, &mut rng);
        let hand = draw_hand(&deck, hand_size, &mut rng);

        prop_assert_eq!(hand.len(), hand_size.min(deck_size));
        let mut ids: Vec<_> = hand.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), hand.len());
        prop_assert_eq!(deck.len(), deck_size);
    }

    #[test]
    fn prop_battle_invariants_hold(
        seed in any::<u64>(),
        timing in timing_strategy(),
        intents in prop::collection::vec(intent_strategy(), 1..120),
    ) {
        let config = BattleConfig::default().with_synergy_timing(timing);
        let mut game = BattleController::seeded(config.clone(), seed).unwrap();

        for intent in intents {
            let before = game.session().clone();
            let dispatch = game.dispatch(intent);

            if !dispatch.is_applied() {
                prop_assert_eq!(game.session(), &before);
                continue;
            }

            if let Some(battle) = game.session().battle() {
                prop_assert!(battle.player_hp <= config.max_health);
                prop_assert!(battle.enemy_hp <= config.max_health);
                prop_assert!(battle.energy <= config.max_energy);
                prop_assert!(battle.field.len() <= config.field_size);
                prop_assert!(battle.log.len() <= config.log_capacity);
                prop_assert!(battle.hand.len() <= config.hand_size);

                let field = battle.field.cards();
                let all_same = field.len() == 3 && field.iter().all(|c| c.element == field[0].element);
                prop_assert_eq!(battle.synergy.is_some(), all_same);
                if let Some(index) = battle.selected {
                    prop_assert!(battle.hand[index].cost() <= battle.energy);
                }
            }

            if let Dispatch::TurnResolved(report) = &dispatch {
                let prev = before.battle().unwrap();
                let now = game.session().battle().unwrap();

                let expected_energy = (prev.energy - report.player_card.cost() + config.energy_regen)
                    .min(config.max_energy);
                prop_assert_eq!(now.energy, expected_energy);

                let dealt = report.player_card.attack.saturating_sub(report.enemy_card.defense)
                    + report.synergy_bonus;
                let taken = report.enemy_card.attack.saturating_sub(report.player_card.defense);
                prop_assert_eq!(report.damage_dealt, dealt);
                prop_assert_eq!(report.damage_taken, taken);
                prop_assert_eq!(now.enemy_hp, prev.enemy_hp.saturating_sub(dealt));
                prop_assert_eq!(now.player_hp, prev.player_hp.saturating_sub(taken));

                prop_assert_eq!(now.turn, prev.turn + 1);
                prop_assert_eq!(now.selected, None);
                let header = format!("Turn {}: ", prev.turn);
                prop_assert!(now.log.latest().unwrap().starts_with(&header));
                prop_assert_eq!(now.field.cards().last(), Some(&report.player_card));

                if prev.field.len() == config.field_size {
                    prop_assert_eq!(report.evicted.as_ref(), prev.field.cards().first());
                }

                match report.result {
                    Some(result) => {
                        prop_assert_eq!(game.phase(), result.phase());
                    }
                    None => {
                        prop_assert_eq!(game.phase(), Phase::Battle);
                    }
                }
                if now.player_hp == 0 {
                    prop_assert_eq!(game.phase(), Phase::GameOver);
                }
            }
        }
    }
}
