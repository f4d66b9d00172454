//! Turn bookkeeping: protocol phase and the per-turn log.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Point};

/// Where the match is in the advance → resolve → rotate protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for `advance_player`.
    AwaitingRoll,
    /// A move was made; its effects are pending.
    AwaitingResolution,
    /// Effects applied; waiting for `update_queues`.
    AwaitingRotation,
    /// Every player has finished.
    Finished,
}

impl TurnPhase {
    /// Phase name for log messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TurnPhase::AwaitingRoll => "awaiting roll",
            TurnPhase::AwaitingResolution => "awaiting resolution",
            TurnPhase::AwaitingRotation => "awaiting rotation",
            TurnPhase::Finished => "finished",
        }
    }
}

/// One advance, as shown in a game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Player who moved.
    pub player: PlayerId,
    /// Dice value supplied by the caller.
    pub roll: u32,
    /// Position before the move.
    pub from: Point,
    /// Position after the move, before effects.
    pub landed: Point,
    /// Position after effects were resolved.
    pub resolved: Point,
    /// Whether this turn finished the board for the player.
    pub won: bool,
}

impl TurnRecord {
    /// Check whether effects moved the player after landing.
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        self.landed != self.resolved
    }
}
