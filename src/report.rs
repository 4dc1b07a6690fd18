//! Human-readable reporting.
//!
//! Everything the program prints goes through a [`Reporter`], a sink for
//! whole lines. The binary writes to stdout; tests collect into a `Vec`.

use std::io::{self, Write};

use crate::montyhall::WinRates;

/// Lines explaining the puzzle, printed before any result.
pub const INSTRUCTIONS: [&str; 5] = [
    "Welcome to Monty Hall, a brain teaser",
    "Suppose you're on a game show, and you're given the choice of three doors: Behind one door is a car; behind the others, goats.",
    "You pick a door, say No. 1, and the host, who knows what's behind the doors, opens another door, say No. 3, which has a goat.",
    "He then says to you, 'Do you want to pick door No. 2?' Is it to your advantage to switch your choice?",
    "",
];

/// Printed after the calculated result.
pub const SIMULATION_HINT: &str = "If you want this program to run a simulation enter a number as a command line argument telling the program how many simulations to run.";

/// A sink for report lines.
pub trait Reporter {
    /// Emit one line of output.
    fn report(&mut self, line: &str);
}

impl Reporter for Vec<String> {
    fn report(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Writes each line to an [`io::Write`].
///
/// Write failures (e.g. a closed pipe) are logged and otherwise ignored;
/// reporting never aborts the program.
pub struct WriteReporter<W: Write> {
    out: W,
}

impl<W: Write> WriteReporter<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriteReporter<io::Stdout> {
    /// Reporter for standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn report(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "failed to write report line");
        }
    }
}

/// Print the puzzle description.
pub fn report_instructions(reporter: &mut impl Reporter) {
    for line in INSTRUCTIONS {
        reporter.report(line);
    }
}

/// Print both win rates.
pub fn report_win_rates(reporter: &mut impl Reporter, rates: &WinRates) {
    reporter.report(&format!("If you do not switch: {}", rates.not_switch));
    reporter.report(&format!("If you do switch: {}", rates.switch));
}

/// Print the exact result, followed by the hint about simulations.
pub fn report_calculation(reporter: &mut impl Reporter, rates: &WinRates) {
    reporter.report("This program has calculated that the chances of winning are:");
    report_win_rates(reporter, rates);
    reporter.report("");
    reporter.report(SIMULATION_HINT);
}

/// Print a simulation result for `requested` trials, followed by a blank
/// line.
pub fn report_simulation(reporter: &mut impl Reporter, requested: i32, rates: &WinRates) {
    reporter.report(&format!(
        "After {} simulations the chances of winning are:",
        requested
    ));
    report_win_rates(reporter, rates);
    reporter.report("");
}

/// Explain that the argument was not a number.
pub fn report_unparsable(reporter: &mut impl Reporter, argument: &str) {
    reporter.report(&format!(
        "I'm sorry, I could not parse: '{}' as a number so I will not run the simulation.",
        argument
    ));
}
