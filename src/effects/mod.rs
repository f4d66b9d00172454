//! Effect system for tile actions.
//!
//! - `Effect`: A pending mutation of player positions
//! - `EffectBatch`: The ordered effects produced by one landing
//! - `EffectResolver`: Applies a batch to player state
//!
//! ## Deferred Application
//!
//! Tiles never mutate players directly. Landing on a tile yields an
//! `EffectBatch`, and the game applies it in a separate step so callers
//! can render the board between the move and its consequences.

mod effect;
mod resolver;

pub use effect::{Effect, EffectBatch};
pub use resolver::{EffectResolver, ResolveResult};
