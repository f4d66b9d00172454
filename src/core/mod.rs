//! Core engine types: points, players, dice, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, the effect
//! system and the game state machine.

pub mod point;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use point::Point;
pub use player::{PlayerGameData, PlayerId, PlayerMap};
pub use rng::{dice_roll, GameRng, GameRngState};
pub use config::{GameConfig, OvershootPolicy, PortalSpec, SwapSpec};
pub use error::{GameError, Result};
