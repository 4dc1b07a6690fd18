//! Doors, strategies and single-trial outcomes.
//!
//! The player always opens with door 0. After the pick, the host (who knows
//! where the prize is) opens every other door hiding a goat except one, so a
//! player who switches always lands on the one remaining closed door. That
//! makes a switch a win exactly when the initial pick was wrong.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of doors on stage.
pub const NUM_DOORS: u8 = 3;

/// The door the player picks first.
pub const PLAYER_DOOR: Door = Door(0);

/// One of the [`NUM_DOORS`] doors, indexed from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door(u8);

impl Door {
    /// Create a door from its index, or `None` if the index is out of range.
    pub fn new(index: u8) -> Option<Self> {
        (index < NUM_DOORS).then_some(Door(index))
    }

    /// Zero-based index of this door.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Pick a door uniformly at random.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Door(rng.gen_range(0..NUM_DOORS))
    }

    /// Iterate over every door on stage.
    pub fn all() -> impl Iterator<Item = Door> {
        (0..NUM_DOORS).map(Door)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Doors are numbered from 1 on the show.
        write!(f, "No. {}", self.0 + 1)
    }
}

/// What the player does once the host has revealed a goat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the initial pick.
    Stay,
    /// Move to the remaining closed door.
    Switch,
}

impl Strategy {
    /// Both strategies, stay first.
    pub fn all() -> [Strategy; 2] {
        [Strategy::Stay, Strategy::Switch]
    }

    /// Whether this strategy wins when the prize is behind `prize`.
    pub fn wins(self, prize: Door) -> bool {
        match self {
            Strategy::Stay => prize == PLAYER_DOOR,
            Strategy::Switch => prize != PLAYER_DOOR,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => write!(f, "Stay"),
            Strategy::Switch => write!(f, "Switch"),
        }
    }
}

/// A single simulated play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Where the prize was placed.
    pub prize: Door,
    /// Strategy the player used.
    pub strategy: Strategy,
}

impl TrialOutcome {
    /// Whether the player walked away with the prize.
    pub fn is_win(&self) -> bool {
        self.strategy.wins(self.prize)
    }
}
