//! Arena for minichess engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the negamax engine and the random baseline
//! cargo run -p arena -- match negamax random --games 20 --depth 4
//!
//! # Show the standings
//! cargo run -p arena -- leaderboard
//! ```

mod elo;
mod match_runner;

pub use elo::*;
pub use match_runner::*;
