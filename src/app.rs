//! Ties argument handling, computation and reporting together.

use rand::Rng;
use tracing::{info, warn};

use crate::cli::Mode;
use crate::montyhall::{analytic, SimulationConfig, SimulationReport, Simulator};
use crate::report::{
    report_calculation, report_instructions, report_simulation, report_unparsable, Reporter,
};

/// Run the program in `mode`, drawing random numbers from `rng` and writing
/// to `reporter`.
///
/// Returns the simulation report when a simulation ran. Never fails: bad
/// input is explained to the user and skipped.
pub fn run<R: Rng>(
    mode: &Mode,
    rng: R,
    show_progress: bool,
    reporter: &mut impl Reporter,
) -> Option<SimulationReport> {
    report_instructions(reporter);

    match mode {
        Mode::Calculate => {
            info!("calculating exact chances");
            report_calculation(reporter, &analytic::calculate());
            None
        }
        Mode::Simulate(requested) => {
            let trials = u64::try_from(*requested).unwrap_or_else(|_| {
                warn!(requested, "non-positive trial count, no trials will run");
                0
            });
            if trials == 0 {
                warn!("no trials requested, both chances are undefined");
            }

            reporter.report("Running simulation...");
            let config = SimulationConfig::new(trials).with_progress(show_progress);
            let report = Simulator::with_rng(config, rng).run();
            info!(
                trials = report.trials(),
                trials_per_second = report.trials_per_second(),
                "simulation done"
            );

            report_simulation(reporter, *requested, &report.win_rates());
            Some(report)
        }
        Mode::Unparsable(argument) => {
            warn!(%argument, "skipping simulation");
            report_unparsable(reporter, argument);
            None
        }
    }
}
