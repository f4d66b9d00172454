//! # ladder-board
//!
//! A turn-based snakes-and-ladders engine: a serpentine grid, special
//! tiles, and a turn state machine that keeps a move and its effects apart.
//!
//! ## Design Principles
//!
//! 1. **Effects Are Data**: Landing on a tile returns an `EffectBatch`
//!    instead of mutating state. The caller applies it in a separate step
//!    and can render the board in between.
//!
//! 2. **Three-Step Turns**: `advance_player` → `process_effects` →
//!    `update_queues`. One turn in flight per `Game`.
//!
//! 3. **Opaque Players**: `PlayerId` is caller-assigned. Nothing assumes
//!    ids are small or contiguous.
//!
//! ## Modules
//!
//! - `core`: Points, players, dice, configuration, errors
//! - `board`: Grid layout and tiles
//! - `effects`: Effect data and resolution
//! - `game`: The match state machine
//! - `games`: Ready-made boards

pub mod core;
pub mod board;
pub mod effects;
pub mod game;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    dice_roll, GameConfig, GameError, GameRng, GameRngState, OvershootPolicy, PlayerGameData,
    PlayerId, PlayerMap, Point, PortalSpec, Result, SwapSpec,
};

pub use crate::board::{Grid, PortalTile, SwapCard, SwapKind, Tile};

pub use crate::effects::{Effect, EffectBatch, EffectResolver, ResolveResult};

pub use crate::game::{Game, TurnPhase, TurnRecord};

pub use crate::games::classic::{classic_config, ClassicMatch, ClassicMatchBuilder};
