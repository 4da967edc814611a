//! Arena CLI
//!
//! Run matches between engines and track Elo ratings.

use arena::{EloTracker, MatchConfig, MatchRunner};
use minichess_core::Engine;
use negamax_engine::NegamaxEngine;
use random_engine::RandomEngine;
use std::env;

const ELO_FILE: &str = "arena_elo.json";

fn print_usage() {
    println!("Minichess Arena");
    println!();
    println!("Usage:");
    println!("  arena match <engine1> <engine2> [--games N] [--depth D] [--openings P]");
    println!("  arena leaderboard");
    println!();
    println!("Engines:");
    println!("  negamax       - Alpha-beta search with material eval");
    println!("  random        - Uniformly random moves");
    println!();
    println!("Examples:");
    println!("  arena match negamax random --games 20 --depth 4");
    println!("  arena match negamax negamax --openings 4");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "negamax" | "alphabeta" => Box::new(NegamaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using negamax", spec);
            Box::new(NegamaxEngine::new())
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig {
        verbose: true,
        ..Default::default()
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--openings" | "-o" => {
                if i + 1 < args.len() {
                    config.opening_random_plies =
                        args[i + 1].parse().unwrap_or(config.opening_random_plies);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Random opening plies: {}",
        config.num_games, config.depth, config.opening_random_plies
    );
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No arena data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
