//! The board: serpentine square layout plus placed tiles.
//!
//! Squares are numbered from 0 (start) to `width * height - 1` (finish).
//! Even rows run left to right and odd rows run right to left, so square
//! `i` always touches squares `i - 1` and `i + 1`.
//!
//! ```
//! use ladder_board::board::Grid;
//! use ladder_board::core::Point;
//!
//! let grid = Grid::new(10, 10).unwrap();
//! assert_eq!(grid.square_to_point(6).unwrap(), Point::new(6, 0));
//! assert_eq!(grid.square_to_point(12).unwrap(), Point::new(7, 1));
//! assert_eq!(grid.point_to_square(Point::new(7, 1)).unwrap(), 12);
//! ```

use rustc_hash::FxHashMap;

use crate::core::{GameError, Point, Result};

use super::tile::Tile;

static PLAIN_TILE: Tile = Tile::Plain;

/// Rectangular board with special tiles keyed by position.
///
/// Tiles are placed before a match starts and are not changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: FxHashMap<Point, Tile>,
}

impl Grid {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || (width as usize).checked_mul(height as usize).is_none() {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            tiles: FxHashMap::default(),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of squares.
    #[must_use]
    pub fn squares(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Index of the finishing square.
    #[must_use]
    pub fn final_square(&self) -> usize {
        self.squares() - 1
    }

    /// Check whether a point lies on the board.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Map a linear square index to its board coordinate.
    pub fn square_to_point(&self, index: usize) -> Result<Point> {
        if index >= self.squares() {
            return Err(GameError::SquareOutOfBounds {
                index,
                squares: self.squares(),
            });
        }

        let width = self.width as usize;
        let row = index / width;
        let column = index % width;
        let x = if row % 2 == 0 { column } else { width - 1 - column };

        Ok(Point::new(x as u32, row as u32))
    }

    /// Map a board coordinate back to its linear square index.
    pub fn point_to_square(&self, point: Point) -> Result<usize> {
        if !self.contains(point) {
            return Err(GameError::PointOutOfBounds(point));
        }

        let width = self.width as usize;
        let row = point.y as usize;
        let column = if row % 2 == 0 {
            point.x as usize
        } else {
            width - 1 - point.x as usize
        };

        Ok(row * width + column)
    }

    /// The 1-based square number shown to players ("Square 7").
    pub fn square_label(&self, point: Point) -> Result<usize> {
        Ok(self.point_to_square(point)? + 1)
    }

    /// The tile at `point`, or the plain tile if none was placed.
    #[must_use]
    pub fn tile_at(&self, point: Point) -> &Tile {
        self.tiles.get(&point).unwrap_or(&PLAIN_TILE)
    }

    /// Place a tile on its square.
    ///
    /// Placing a second tile on an occupied square is rejected with
    /// `TilePlacementConflict`; the existing tile is kept. Plain tiles
    /// carry no position and are accepted as a no-op.
    pub fn add_tile(&mut self, tile: impl Into<Tile>) -> Result<()> {
        let tile = tile.into();
        let Some(at) = tile.position() else {
            return Ok(());
        };

        if !self.contains(at) {
            return Err(GameError::PointOutOfBounds(at));
        }
        if let Tile::Portal(portal) = &tile {
            if !self.contains(portal.destination) {
                return Err(GameError::PointOutOfBounds(portal.destination));
            }
        }
        if self.tiles.contains_key(&at) {
            return Err(GameError::TilePlacementConflict(at));
        }

        self.tiles.insert(at, tile);
        Ok(())
    }

    /// Iterate over placed tiles, ordered by square index.
    pub fn tiles(&self) -> impl Iterator<Item = (Point, &Tile)> {
        let mut placed: Vec<_> = self.tiles.iter().map(|(p, t)| (*p, t)).collect();
        placed.sort_by_key(|(p, _)| self.point_to_square(*p).unwrap_or(usize::MAX));
        placed.into_iter()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}
