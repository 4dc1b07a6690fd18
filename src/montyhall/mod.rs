//! Monty Hall win probabilities.
//!
//! Suppose you're on a game show and given the choice of three doors. Behind
//! one is a car, behind the others goats. You pick a door, the host (who
//! knows what's behind the doors) opens another door with a goat, and offers
//! you the remaining one. Should you switch?
//!
//! This module answers that two ways:
//!
//! - [`analytic::calculate`] enumerates the three prize placements and
//!   returns the exact chances (1/3 for staying, 2/3 for switching).
//! - [`Simulator`] plays random trials, flipping a fair coin each time to
//!   pick a strategy, and reports the empirical win rate of each group.
//!
//! Both return a [`WinRates`] pair.
//!
//! # Example
//!
//! ```
//! use monty_hall::montyhall::{analytic, SimulationConfig, Simulator};
//!
//! let exact = analytic::calculate();
//! assert_eq!(exact.switch.to_string(), "66.67%");
//!
//! let report = Simulator::new(SimulationConfig::new(10_000).with_seed(42)).run();
//! assert_eq!(report.trials(), 10_000);
//! ```

pub mod analytic;
pub mod config;
pub mod game;
pub mod result;
pub mod simulator;

// Re-export main types for convenient access
pub use config::{ConfigError, SimulationConfig};
pub use game::{Door, Strategy, TrialOutcome, NUM_DOORS, PLAYER_DOOR};
pub use result::{Percentage, WinRates};
pub use simulator::{play_trial, simulate, SimulationReport, Simulator, Tally};
