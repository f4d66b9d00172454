//! Match state machine: player positions, turn order and finishing order.
//!
//! ## Key Types
//!
//! - `Game`: Orchestrates advance → resolve → rotate
//! - `TurnPhase`: Which protocol step the match is waiting for
//! - `TurnRecord`: One entry of the turn log

mod state;
mod turn;

pub use state::Game;
pub use turn::{TurnPhase, TurnRecord};
