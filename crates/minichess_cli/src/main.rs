//! One-shot solver: reads a game state from stdin (move-number/side header
//! plus six board rows), searches to a fixed depth, and prints the chosen
//! move in arbiter notation on stdout.

use minichess_core::{move_to_text, search, Position};
use std::env;
use std::io::{self, Read};
use std::process;

fn print_usage() {
    println!("minichess_cli [--depth D] [--verbose]");
    println!();
    println!("Reads the game state from stdin:");
    println!("  1 W");
    println!("  kqbnr");
    println!("  ppppp");
    println!("  .....");
    println!("  .....");
    println!("  PPPPP");
    println!("  RNBQK");
    println!();
    println!("Prints the chosen move, e.g. \"a2-a3\".");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut depth = search::DEFAULT_DEPTH;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(depth);
                    i += 1;
                }
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", e);
        process::exit(1);
    }

    let pos = match Position::from_board_text(&input) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("Invalid position: {}", e);
            process::exit(1);
        }
    };

    if verbose {
        eprint!("{}", pos);
        eprintln!("{:?} to move, depth {}", pos.side_to_move, depth);
    }

    let mut nodes = 0u64;
    match search::pick_best_move(&pos, depth, &mut nodes) {
        Some((mv, score)) => {
            if verbose {
                eprintln!("score {:?}, {} nodes", score, nodes);
            }
            println!("{}", move_to_text(mv));
        }
        None => {
            eprintln!("no move available");
            process::exit(1);
        }
    }
}
