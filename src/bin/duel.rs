use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};

use card_battle::core::{BattleConfig, GameRng, Intent, Phase, SynergyTiming};
use card_battle::session::{BattleController, BattleView, SessionView};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a card battle in the terminal", long_about = None)]
struct Args {
    /// Random seed (entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play one battle automatically with the first affordable card
    #[arg(short, long)]
    auto: bool,

    /// Pay the synergy bonus on the turn after it forms
    #[arg(long)]
    deferred_synergy: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let timing = if args.deferred_synergy {
        SynergyTiming::Deferred
    } else {
        SynergyTiming::Immediate
    };
    let config = BattleConfig::default().with_synergy_timing(timing);
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("Seed {}", rng.seed());

    let mut game = match BattleController::with_rng(config, rng) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    if args.auto {
        auto_play(&mut game);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        render(&game.view());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let command = line?.trim().to_lowercase();
        if command == "q" || command == "quit" {
            return Ok(());
        }

        match (game.phase(), command.as_str()) {
            (Phase::Menu, "1") | (Phase::Menu, "start") => {
                game.start_battle();
            }
            (Phase::Menu, "2") | (Phase::Menu, "3") | (Phase::Menu, "4") => {
                println!("Coming soon.");
            }
            (Phase::Battle, "go") => {
                if let Some(report) = game.execute_turn().report() {
                    println!(
                        "You dealt {} and took {}.",
                        report.damage_dealt, report.damage_taken
                    );
                } else {
                    println!("Select a card first.");
                }
            }
            (Phase::Battle, pick) => match pick.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if !game.select_card(n - 1).is_applied() {
                        println!("Can't select that card.");
                    }
                }
                _ => println!("Commands: 1-5 to select, go to play, q to quit."),
            },
            (Phase::Victory, _) | (Phase::GameOver, _) => {
                game.return_to_menu();
            }
            _ => println!("Unknown command."),
        }
    }
}

fn auto_play(game: &mut BattleController) {
    game.start_battle();
    while game.phase() == Phase::Battle {
        let Some(select) = game
            .legal_intents()
            .into_iter()
            .find(|i| matches!(i, Intent::SelectCard(_)))
        else {
            println!("No affordable card; stopping.");
            return;
        };
        game.dispatch(select);
        game.execute_turn();
        render(&game.view());
    }
}

fn render(view: &SessionView) {
    println!();
    match view.phase {
        Phase::Menu => {
            println!("=== Card Deck RPG ===");
            for (i, entry) in view.menu.iter().enumerate() {
                let note = if entry.is_available() { "" } else { " (coming soon)" };
                println!("  {}. {}{}", i + 1, entry.label(), note);
            }
        }
        Phase::Battle => {
            if let Some(battle) = &view.battle {
                render_battle(battle);
            }
        }
        Phase::Victory => {
            println!("=== Victory! ===");
            if let Some(reward) = view.reward {
                println!("  EXP +{}  Coins +{}", reward.experience, reward.coins);
            }
            println!("Press enter to return to the menu.");
        }
        Phase::GameOver => {
            println!("=== Game Over ===");
            println!("Press enter to return to the menu.");
        }
    }
}

fn render_battle(battle: &BattleView) {
    println!(
        "Turn {}   Energy {}/{}",
        battle.turn, battle.energy, battle.max_energy
    );
    println!("Enemy  HP {}/{}", battle.enemy_hp, battle.max_health);
    if let Some(card) = &battle.enemy_card {
        println!("  enemy played: {} {}", card.element.icon(), card);
    }

    let field: Vec<_> = battle
        .field
        .iter()
        .map(|c| format!("{} {}", c.element.icon(), c.name))
        .collect();
    println!("Field: [{}]", field.join(", "));
    if let Some(element) = battle.synergy {
        println!("  {} {} synergy active!", element.icon(), element.name());
    }

    println!("Player HP {}/{}", battle.player_hp, battle.max_health);
    for (i, card) in battle.hand.iter().enumerate() {
        let marker = if battle.selected == Some(i) { '*' } else { ' ' };
        let dim = if battle.playable[i] { "" } else { " (not enough energy)" };
        println!("  {}{}. {} {}{}", marker, i + 1, card.element.icon(), card, dim);
    }

    for line in &battle.log {
        println!("  | {}", line);
    }
}
