//! # Monty Hall
//!
//! Computes the chances of winning the Monty Hall game show puzzle when
//! switching doors versus keeping the first pick, either exactly or by
//! Monte Carlo simulation.
//!
//! ## Quick Start
//!
//! ```
//! use monty_hall::montyhall::{analytic, SimulationConfig, Simulator};
//!
//! // Exact chances
//! let exact = analytic::calculate();
//! println!("stay {} / switch {}", exact.not_switch, exact.switch);
//!
//! // Simulated chances, reproducible with a seed
//! let report = Simulator::new(SimulationConfig::new(100_000).with_seed(42)).run();
//! println!("{:?}", report.win_rates());
//! ```
//!
//! ## Modules
//!
//! - [`montyhall`]: Doors, strategies, the calculator and the simulator
//! - [`report`]: Line-oriented output sink and message formatting
//! - [`cli`]: Command-line arguments
//! - [`app`]: Runs one invocation of the program
//!
//! ## Architecture
//!
//! ```text
//!            ┌──────────┐
//!            │   cli    │  TRIALS argument → Mode
//!            └────┬─────┘
//!                 ▼
//!            ┌──────────┐
//!            │   app    │
//!            └────┬─────┘
//!        ┌────────┴─────────┐
//!        ▼                  ▼
//!  ┌───────────┐     ┌─────────────┐
//!  │ analytic  │     │  simulator  │ ◄── R: Rng
//!  └─────┬─────┘     └──────┬──────┘
//!        └───── WinRates ───┘
//!                 ▼
//!            ┌──────────┐
//!            │  report  │ ──► Reporter (stdout)
//!            └──────────┘
//! ```

#![warn(missing_docs)]

/// Game model, calculator and simulator.
pub mod montyhall;

/// Reporting sink and message formatting.
pub mod report;

/// Command-line arguments.
pub mod cli;

/// Program orchestration.
pub mod app;

// Re-export commonly used types at crate root for convenience
pub use montyhall::{Percentage, SimulationConfig, SimulationReport, Simulator, WinRates};
