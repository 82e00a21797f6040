use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    Match,
    Mismatch,
}

/// Notifications the presentation layer observes through [`MemoryGame::drain_events`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A compared pair was settled. Matches settle immediately, mismatches once flipped back.
    PairResolved {
        first: CardIndex,
        second: CardIndex,
        outcome: PairOutcome,
    },
    /// The elapsed-time counter advanced.
    Tick { seconds: u32 },
    /// Every pair was found, delivered once after the win grace delay.
    Won { moves: u32, seconds: u32 },
}

/// Result of a single card selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Out of range, locked, already revealed or game over.
    Ignored,
    /// First card of a turn turned face up.
    Flipped,
    Matched,
    /// Pair differs, it flips back once the delay elapses.
    Mismatched,
    /// Final pair matched.
    Completed,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Ignored => false,
            Flipped => true,
            Matched => true,
            Mismatched => true,
            Completed => true,
        }
    }
}
