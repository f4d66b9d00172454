//! Game configuration types.
//!
//! A match is configured at startup by providing:
//! - Board dimensions and die size
//! - `OvershootPolicy`: What happens when a roll passes the final square
//! - `PortalSpec` / `SwapSpec`: Special squares, by linear square index
//!
//! `GameConfig` deserializes with defaults for every missing field, so a
//! partial JSON document like `{"width": 8}` is a valid configuration.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::PlayerId;
use crate::board::{Grid, PortalTile, SwapCard, SwapKind};

/// What happens when a roll would carry a player past the final square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvershootPolicy {
    /// Reaching or passing the final square wins. The player is placed
    /// on the final square.
    #[default]
    Win,
    /// A roll past the final square forfeits the move. Only an exact
    /// landing wins.
    Stay,
}

/// A portal between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSpec {
    pub from: usize,
    pub to: usize,
}

/// A swap card on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapSpec {
    pub square: usize,
    #[serde(default)]
    pub kind: SwapKind,
    #[serde(default)]
    pub target: Option<PlayerId>,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in squares.
    pub width: u32,

    /// Board height in squares.
    pub height: u32,

    /// Faces on the die.
    pub dice_sides: u32,

    /// Overshoot rule for the final square.
    pub overshoot: OvershootPolicy,

    /// Portals, in placement order.
    pub portals: Vec<PortalSpec>,

    /// Swap cards, in placement order.
    pub swaps: Vec<SwapSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            dice_sides: 6,
            overshoot: OvershootPolicy::Win,
            portals: Vec::new(),
            swaps: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration (10x10, d6, overshoot wins).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Set the overshoot rule.
    #[must_use]
    pub fn with_overshoot(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }

    /// Add a portal from one square to another.
    #[must_use]
    pub fn with_portal(mut self, from: usize, to: usize) -> Self {
        self.portals.push(PortalSpec { from, to });
        self
    }

    /// Add a swap card.
    #[must_use]
    pub fn with_swap(mut self, square: usize, kind: SwapKind, target: Option<PlayerId>) -> Self {
        self.swaps.push(SwapSpec { square, kind, target });
        self
    }

    /// Build the board described by this configuration.
    ///
    /// Fails on bad dimensions, off-board squares, or two special squares
    /// sharing a position.
    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.width, self.height)?;

        for portal in &self.portals {
            let at = grid.square_to_point(portal.from)?;
            let destination = grid.square_to_point(portal.to)?;
            grid.add_tile(PortalTile::new(at, destination))?;
        }

        for swap in &self.swaps {
            let at = grid.square_to_point(swap.square)?;
            grid.add_tile(SwapCard {
                at,
                kind: swap.kind,
                target: swap.target,
            })?;
        }

        Ok(grid)
    }
}
