//! Engine error types.
//!
//! Every error here is a caller error: the engine is deterministic and
//! validates its inputs at the boundary, so nothing is retried internally.

use thiserror::Error;

use super::player::PlayerId;
use super::point::Point;

/// Result alias used throughout the engine.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Errors reported by the board and game APIs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A player id that was never registered with the game.
    #[error("unknown player reference: {0}")]
    InvalidPlayerReference(PlayerId),

    /// A roll (or die size) that is zero or otherwise unusable.
    #[error("invalid roll value: {0}")]
    InvalidRollValue(u32),

    /// Two tiles registered on the same square.
    #[error("a tile is already placed at {0}")]
    TilePlacementConflict(Point),

    /// An effect references a player that is not part of the game.
    #[error("effect references unknown player {0}")]
    EffectApplicationFailure(PlayerId),

    /// Board dimensions must both be positive.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A linear square index outside `[0, squares)`.
    #[error("square {index} is outside the board ({squares} squares)")]
    SquareOutOfBounds { index: usize, squares: usize },

    /// A grid coordinate outside the board.
    #[error("point {0} is outside the board")]
    PointOutOfBounds(Point),

    /// The same id appears twice in a roster.
    #[error("{0} registered more than once")]
    DuplicatePlayer(PlayerId),

    /// A match needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,
}
