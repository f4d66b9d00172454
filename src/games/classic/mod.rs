//! The classic 10x10 snakes and ladders board.
//!
//! - 100 squares, one six-sided die
//! - Ladders and snakes are portals between fixed squares
//! - Reaching or passing square 100 finishes the board
//!
//! Supports any number of players; the match runs until every player
//! but the last has finished.

mod game;

pub use game::{classic_config, ClassicMatch, ClassicMatchBuilder, LADDERS, SNAKES};
