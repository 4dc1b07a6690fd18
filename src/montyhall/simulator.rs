//! Monte Carlo simulation of the game show.
//!
//! Each trial places the prize behind a uniformly random door and flips a
//! fair coin to decide whether the player switches. Trials are therefore
//! partitioned into switch and stay groups of random size, and each group's
//! win rate is computed against its own attempt count. At low trial counts
//! the two groups can be very unequal, or one can be empty, in which case its
//! percentage is [`Percentage::Undefined`].

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::montyhall::config::SimulationConfig;
use crate::montyhall::game::{Door, Strategy, TrialOutcome};
use crate::montyhall::result::{Percentage, WinRates};

/// Trials between progress bar updates.
const PROGRESS_CHUNK: u64 = 4096;

/// Attempt and win counters per strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Trials in which the player switched.
    pub switch_attempts: u64,
    /// Switch trials that won the prize.
    pub switch_wins: u64,
    /// Trials in which the player stayed.
    pub stay_attempts: u64,
    /// Stay trials that won the prize.
    pub stay_wins: u64,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one trial.
    pub fn record(&mut self, outcome: TrialOutcome) {
        let won = outcome.is_win();
        match outcome.strategy {
            Strategy::Switch => {
                self.switch_attempts += 1;
                if won {
                    self.switch_wins += 1;
                }
            }
            Strategy::Stay => {
                self.stay_attempts += 1;
                if won {
                    self.stay_wins += 1;
                }
            }
        }
    }

    /// Total number of trials counted.
    pub fn trials(&self) -> u64 {
        self.switch_attempts + self.stay_attempts
    }

    /// Win rates, each against its own group's attempts.
    pub fn win_rates(&self) -> WinRates {
        WinRates::new(
            Percentage::from_counts(self.stay_wins, self.stay_attempts),
            Percentage::from_counts(self.switch_wins, self.switch_attempts),
        )
    }
}

/// Play one trial using `rng`.
pub fn play_trial<R: Rng>(rng: &mut R) -> TrialOutcome {
    let prize = Door::sample(rng);
    let strategy = if rng.gen_bool(0.5) {
        Strategy::Switch
    } else {
        Strategy::Stay
    };
    TrialOutcome { prize, strategy }
}

/// Play `trials` trials and return the counts.
///
/// This is the pure core of the simulator: the random source is the only
/// input besides the trial count.
pub fn simulate<R: Rng>(trials: u64, rng: &mut R) -> Tally {
    let mut tally = Tally::new();
    for _ in 0..trials {
        tally.record(play_trial(rng));
    }
    tally
}

/// Outcome of a full simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-strategy counts.
    pub tally: Tally,
    /// Wall-clock time spent playing trials.
    pub elapsed_seconds: f64,
}

impl SimulationReport {
    /// Number of trials played.
    pub fn trials(&self) -> u64 {
        self.tally.trials()
    }

    /// Win rates derived from the tally.
    pub fn win_rates(&self) -> WinRates {
        self.tally.win_rates()
    }

    /// Trials played per second, or 0 if no time was measured.
    pub fn trials_per_second(&self) -> f64 {
        if self.elapsed_seconds > 0.0 {
            self.trials() as f64 / self.elapsed_seconds
        } else {
            0.0
        }
    }
}

/// Runs Monte Carlo trials from a [`SimulationConfig`].
///
/// The random source is a type parameter so tests can substitute a seeded
/// generator; [`Simulator::new`] uses [`StdRng`].
///
/// # Example
/// ```
/// use monty_hall::montyhall::{SimulationConfig, Simulator};
///
/// let mut simulator = Simulator::new(SimulationConfig::new(500).with_seed(1));
/// let report = simulator.run();
/// assert_eq!(report.trials(), 500);
/// ```
pub struct Simulator<R: Rng = StdRng> {
    config: SimulationConfig,
    rng: R,
}

impl Simulator<StdRng> {
    /// Create a simulator, seeding from `config.seed` or OS entropy.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// The configuration this simulator runs with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play a single trial.
    pub fn run_trial(&mut self) -> TrialOutcome {
        play_trial(&mut self.rng)
    }

    /// Play `config.trials` trials.
    pub fn run(&mut self) -> SimulationReport {
        let trials = self.config.trials;
        debug!(trials, seed = ?self.config.seed, "starting simulation");

        let progress = self.progress_bar();
        let start_time = Instant::now();

        let mut tally = Tally::new();
        let mut played = 0;
        while played < trials {
            let chunk = PROGRESS_CHUNK.min(trials - played);
            for _ in 0..chunk {
                tally.record(self.run_trial());
            }
            played += chunk;
            progress.inc(chunk);
        }
        progress.finish_and_clear();

        let report = SimulationReport {
            tally,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };

        info!(
            trials = report.trials(),
            switch_attempts = tally.switch_attempts,
            stay_attempts = tally.stay_attempts,
            elapsed_seconds = report.elapsed_seconds,
            "simulation finished"
        );

        report
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(self.config.trials);
        let style = ProgressStyle::with_template("{bar:40} {pos}/{len} trials ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montyhall::game::NUM_DOORS;

    #[test]
    fn test_attempts_sum_to_trials() {
        let mut rng = StdRng::seed_from_u64(42);
        for trials in [1u64, 2, 17, 500, 4097] {
            let tally = simulate(trials, &mut rng);
            assert_eq!(tally.switch_attempts + tally.stay_attempts, trials);
            assert!(tally.switch_wins <= tally.switch_attempts);
            assert!(tally.stay_wins <= tally.stay_attempts);
        }
    }

    #[test]
    fn test_single_trial_leaves_one_group_undefined() {
        let mut rng = StdRng::seed_from_u64(7);
        let tally = simulate(1, &mut rng);
        let rates = tally.win_rates();

        if tally.switch_attempts == 1 {
            assert_eq!(tally.stay_attempts, 0);
            assert!(rates.not_switch.is_undefined());
            assert!(!rates.switch.is_undefined());
        } else {
            assert_eq!(tally.stay_attempts, 1);
            assert_eq!(tally.switch_attempts, 0);
            assert!(rates.switch.is_undefined());
            assert!(!rates.not_switch.is_undefined());
        }
    }

    #[test]
    fn test_zero_trials() {
        let mut rng = StdRng::seed_from_u64(0);
        let rates = simulate(0, &mut rng).win_rates();
        assert!(rates.not_switch.is_undefined());
        assert!(rates.switch.is_undefined());
    }

    #[test]
    fn test_converges_to_exact_chances() {
        let config = SimulationConfig::new(100_000).with_seed(2014);
        let report = Simulator::new(config).run();
        let rates = report.win_rates();

        let stay = rates.not_switch.value().unwrap();
        let switch = rates.switch.value().unwrap();
        println!("Stay: {:.2}%, Switch: {:.2}%", stay, switch);

        assert!((stay - 100.0 / 3.0).abs() < 2.0, "stay rate {} should be near 33.33", stay);
        assert!((switch - 200.0 / 3.0).abs() < 2.0, "switch rate {} should be near 66.67", switch);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = Simulator::new(SimulationConfig::new(1_000).with_seed(5)).run();
        let b = Simulator::new(SimulationConfig::new(1_000).with_seed(5)).run();
        assert_eq!(a.tally, b.tally);
    }

    #[test]
    fn test_injected_rng_matches_pure_simulate() {
        let config = SimulationConfig::new(300);
        let report = Simulator::with_rng(config, StdRng::seed_from_u64(11)).run();
        let tally = simulate(300, &mut StdRng::seed_from_u64(11));
        assert_eq!(report.tally, tally);
    }

    #[test]
    fn test_run_trial_records_consistently() {
        let mut simulator = Simulator::new(SimulationConfig::new(0).with_seed(3));
        let mut tally = Tally::new();
        for _ in 0..50 {
            let outcome = simulator.run_trial();
            assert!(outcome.prize.index() < NUM_DOORS);
            tally.record(outcome);
        }
        assert_eq!(tally.trials(), 50);
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::new();
        let car = Door::new(1).unwrap();
        tally.record(TrialOutcome { prize: car, strategy: Strategy::Switch });
        tally.record(TrialOutcome { prize: car, strategy: Strategy::Stay });
        tally.record(TrialOutcome { prize: car, strategy: Strategy::Stay });

        assert_eq!(tally.switch_attempts, 1);
        assert_eq!(tally.switch_wins, 1);
        assert_eq!(tally.stay_attempts, 2);
        assert_eq!(tally.stay_wins, 0);
        assert_eq!(tally.win_rates().switch.to_string(), "100.00%");
        assert_eq!(tally.win_rates().not_switch.to_string(), "0.00%");
    }
}
