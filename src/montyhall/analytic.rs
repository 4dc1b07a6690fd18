//! Closed-form win probabilities.
//!
//! With the player's pick fixed at door 0, each of the three prize
//! placements is equally likely. Counting the placements each strategy
//! wins gives the exact chances: 1 of 3 for staying, 2 of 3 for switching.

use crate::montyhall::game::{Door, Strategy, NUM_DOORS};
use crate::montyhall::result::{Percentage, WinRates};

/// Enumerate every prize placement and return the exact win rates.
pub fn calculate() -> WinRates {
    let mut stay_wins = 0u64;
    let mut switch_wins = 0u64;

    for prize in Door::all() {
        if Strategy::Stay.wins(prize) {
            stay_wins += 1;
        }
        if Strategy::Switch.wins(prize) {
            switch_wins += 1;
        }
    }

    let placements = NUM_DOORS as u64;
    WinRates::new(
        Percentage::from_counts(stay_wins, placements),
        Percentage::from_counts(switch_wins, placements),
    )
}
