//! Board model: the grid and the tiles placed on it.
//!
//! ## Key Types
//!
//! - `Grid`: Serpentine square layout and tile lookup
//! - `Tile`: Closed set of square behaviors (plain, portal, swap)
//! - `PortalTile`: Teleports the landing player
//! - `SwapCard`: Exchanges the landing player with another player

pub mod grid;
pub mod tile;

pub use grid::Grid;
pub use tile::{PortalTile, SwapCard, SwapKind, Tile};
