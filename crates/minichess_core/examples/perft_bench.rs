//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p minichess_core -- [depth]
//!
//! Defaults to depth 8 from the starting position.

use minichess_core::{perft, Position};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    let mut pos = Position::startpos();
    let start = Instant::now();
    let nodes = perft(&mut pos, depth);
    let elapsed = start.elapsed();

    println!(
        "perft({depth}) = {nodes} in {elapsed:.3?} ({:.1} Mn/s)",
        (nodes as f64 / 1_000_000.0) / elapsed.as_secs_f64()
    );
}
