//! Watch the simulated chances approach the exact ones as trials grow.

use monty_hall::montyhall::{analytic, SimulationConfig, Simulator};

fn main() {
    let exact = analytic::calculate();
    println!("Exact: stay {}, switch {}", exact.not_switch, exact.switch);
    println!();

    for exponent in 0..=6u32 {
        let trials = 10u64.pow(exponent);
        let report = Simulator::new(SimulationConfig::new(trials).with_seed(42)).run();
        let rates = report.win_rates();
        let tally = report.tally;

        println!(
            "{:>9} trials: stay {:>9} ({:>7} played), switch {:>9} ({:>7} played)",
            trials, rates.not_switch, tally.stay_attempts, rates.switch, tally.switch_attempts
        );
    }
}
