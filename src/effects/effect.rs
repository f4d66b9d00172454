//! Effect definitions.
//!
//! Effects are pending mutations produced by tiles. They are plain data:
//! the advance step returns them and the resolve step applies them, so
//! the pre-effect and post-effect board can both be observed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Point};

/// A pending state mutation.
///
/// ## Position Effects
///
/// - `MoveTo`: Place one player on a square (portals)
/// - `Swap`: Exchange two players' positions atomically (swap cards)
///
/// ## Extension Effects
///
/// - `Custom`: A kind the built-in resolver does not know. It is never
///   applied, only logged and skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Move a player to a fixed destination.
    ///
    /// Applying this never triggers the tile at `destination`.
    MoveTo {
        player: PlayerId,
        destination: Point,
    },

    /// Exchange the positions of two players.
    ///
    /// `first == second` is a no-op.
    Swap {
        first: PlayerId,
        second: PlayerId,
    },

    /// Effect kind registered outside the engine.
    Custom {
        kind: String,
    },
}

impl Effect {
    /// Create a move effect.
    pub fn move_to(player: PlayerId, destination: Point) -> Self {
        Self::MoveTo { player, destination }
    }

    /// Create a swap effect.
    pub fn swap(first: PlayerId, second: PlayerId) -> Self {
        Self::Swap { first, second }
    }

    /// Create a custom effect.
    pub fn custom(kind: impl Into<String>) -> Self {
        Self::Custom { kind: kind.into() }
    }

    /// Players this effect reads or writes.
    pub fn players(&self) -> SmallVec<[PlayerId; 2]> {
        match self {
            Effect::MoveTo { player, .. } => SmallVec::from_slice(&[*player]),
            Effect::Swap { first, second } => SmallVec::from_slice(&[*first, *second]),
            Effect::Custom { .. } => SmallVec::new(),
        }
    }
}

/// An ordered list of effects from one landing.
///
/// SmallVec keeps the common 0-1 effect case off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBatch {
    effects: SmallVec<[Effect; 2]>,
}

impl EffectBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch holding one effect.
    pub fn single(effect: Effect) -> Self {
        let mut batch = Self::new();
        batch.push(effect);
        batch
    }

    /// Append an effect.
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Iterate over effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Get number of effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }
}

impl FromIterator<Effect> for EffectBatch {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = smallvec::IntoIter<[Effect; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl<'a> IntoIterator for &'a EffectBatch {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}
