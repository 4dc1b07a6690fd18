//! Command-line surface.

use std::num::ParseIntError;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "monty-hall",
    version,
    about = "Calculate or simulate the chances of winning the Monty Hall game",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of simulations to run; omit to print the calculated chances
    #[arg(value_name = "TRIALS", allow_hyphen_values = true)]
    pub trials: Option<String>,

    /// Extra arguments after TRIALS are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// What the program should do, decided from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the exact chances.
    Calculate,
    /// Run this many simulations. Non-positive counts are kept as given.
    Simulate(i32),
    /// The argument was not a number; nothing is computed.
    Unparsable(String),
}

/// The trial count argument was not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialsParseError {
    /// The argument as given.
    pub argument: String,
    /// Why it did not parse.
    pub source: ParseIntError,
}

impl std::fmt::Display for TrialsParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a number: {}", self.argument, self.source)
    }
}

impl std::error::Error for TrialsParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Parse a trial count argument. Counts must fit in 32 bits.
pub fn parse_trials(argument: &str) -> Result<i32, TrialsParseError> {
    argument.parse::<i32>().map_err(|source| TrialsParseError {
        argument: argument.to_string(),
        source,
    })
}

impl Cli {
    /// Decide the run mode. Parse failures are folded into
    /// [`Mode::Unparsable`].
    pub fn mode(&self) -> Mode {
        match self.trials.as_deref() {
            None => Mode::Calculate,
            Some(arg) => match parse_trials(arg) {
                Ok(n) => Mode::Simulate(n),
                Err(e) => {
                    tracing::debug!(error = %e, "trial count did not parse");
                    Mode::Unparsable(e.argument)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(args: &[&str]) -> Mode {
        let argv = std::iter::once("monty-hall").chain(args.iter().copied());
        Cli::parse_from(argv).mode()
    }

    #[test]
    fn test_no_argument_calculates() {
        assert_eq!(mode_of(&[]), Mode::Calculate);
    }

    #[test]
    fn test_number_simulates() {
        assert_eq!(mode_of(&["500"]), Mode::Simulate(500));
        assert_eq!(mode_of(&["+12"]), Mode::Simulate(12));
        assert_eq!(mode_of(&["-5"]), Mode::Simulate(-5));
    }

    #[test]
    fn test_text_is_unparsable() {
        assert_eq!(mode_of(&["abc"]), Mode::Unparsable("abc".to_string()));
        assert_eq!(mode_of(&["1.5"]), Mode::Unparsable("1.5".to_string()));
    }

    #[test]
    fn test_hyphenated_text_is_unparsable() {
        assert_eq!(mode_of(&["-x"]), Mode::Unparsable("-x".to_string()));
        assert_eq!(mode_of(&["--bogus"]), Mode::Unparsable("--bogus".to_string()));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(mode_of(&["5", "6"]), Mode::Simulate(5));
        assert_eq!(mode_of(&["abc", "-x", "7"]), Mode::Unparsable("abc".to_string()));
    }

    #[test]
    fn test_count_beyond_32_bits_is_unparsable() {
        assert_eq!(
            mode_of(&["3000000000"]),
            Mode::Unparsable("3000000000".to_string())
        );
        assert_eq!(mode_of(&["2147483647"]), Mode::Simulate(i32::MAX));
        assert!(parse_trials("-2147483649").is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_trials("ten").unwrap_err();
        assert_eq!(err.argument, "ten");
        assert!(err.to_string().starts_with("'ten' is not a number"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
