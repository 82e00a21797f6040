#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use schedule::*;
pub use symbol::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod event;
mod generator;
mod schedule;
mod symbol;
mod types;

/// Fixed display delays of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// How long a mismatched pair stays face up.
    pub flip_back: Duration,
    /// Pause between the final match and the win notification.
    pub win_grace: Duration,
    /// Period of the elapsed-time counter.
    pub tick: Duration,
}

impl Timings {
    pub const DEFAULT: Self = Self {
        flip_back: Duration::from_millis(800),
        win_grace: Duration::from_millis(500),
        tick: Duration::from_secs(1),
    };
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    #[serde(default)]
    pub timings: Timings,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 4;

    pub const fn new_unchecked(size: Coord, timings: Timings) -> Self {
        Self { size, timings }
    }

    pub fn new(size: Coord) -> Self {
        Self::new_unchecked(size.clamp(1, Coord::MAX), Timings::DEFAULT)
    }

    pub fn try_new(size: Coord) -> Result<Self> {
        let config = Self::new_unchecked(size, Timings::DEFAULT);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_timings(self, timings: Timings) -> Self {
        Self::new_unchecked(self.size, timings)
    }

    pub const fn with_size(self, size: Coord) -> Self {
        Self::new_unchecked(size, self.timings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            Err(GameError::InvalidSize)
        } else {
            Ok(())
        }
    }

    /// `size²`, plus one when that is odd.
    pub const fn total_cards(&self) -> CardCount {
        total_cards_for(self.size)
    }

    pub const fn needed_pairs(&self) -> CardCount {
        self.total_cards() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
