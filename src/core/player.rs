//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Opaque, caller-assigned identifier. The engine never assumes ids are
//! small or contiguous.
//!
//! ## PlayerMap
//!
//! Per-player storage keyed by `PlayerId` with O(1) lookup. Iteration
//! follows registration order, and entries are never removed.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::point::Point;

/// Opaque player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player match state.
///
/// Owned by the `Game`. Positions only change through the
/// advance/resolve pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameData {
    player_id: PlayerId,
    position: Point,
}

impl PlayerGameData {
    /// Create a player record at the given position.
    #[must_use]
    pub fn new(player_id: PlayerId, position: Point) -> Self {
        Self { player_id, position }
    }

    /// The owning player.
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Current board position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// Per-player data keyed by `PlayerId`.
///
/// ## Example
///
/// ```
/// use ladder_board::core::{PlayerId, PlayerMap};
///
/// let mut squares: PlayerMap<usize> = PlayerMap::new();
/// squares.insert(PlayerId::new(40), 0);
/// squares.insert(PlayerId::new(7), 12);
///
/// assert_eq!(squares.get(PlayerId::new(7)), Some(&12));
///
/// // Iteration follows registration order
/// let ids: Vec<_> = squares.player_ids().collect();
/// assert_eq!(ids, vec![PlayerId::new(40), PlayerId::new(7)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "PlayerMapRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct PlayerMap<T> {
    data: FxHashMap<PlayerId, T>,
    order: Vec<PlayerId>,
}

/// Unchecked wire form of a `PlayerMap`.
#[derive(Deserialize)]
struct PlayerMapRepr<T> {
    data: FxHashMap<PlayerId, T>,
    order: Vec<PlayerId>,
}

impl<T> TryFrom<PlayerMapRepr<T>> for PlayerMap<T> {
    type Error = GameError;

    /// `order` must list every key of `data` exactly once.
    fn try_from(repr: PlayerMapRepr<T>) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        for id in &repr.order {
            if !repr.data.contains_key(id) {
                return Err(GameError::InvalidPlayerReference(*id));
            }
            if !seen.insert(*id) {
                return Err(GameError::DuplicatePlayer(*id));
            }
        }
        if let Some(stray) = repr.data.keys().find(|id| !seen.contains(*id)) {
            return Err(GameError::InvalidPlayerReference(*stray));
        }

        Ok(Self {
            data: repr.data,
            order: repr.order,
        })
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Insert or replace a player's entry.
    ///
    /// Returns the previous value if the player was already registered.
    pub fn insert(&mut self, player: PlayerId, value: T) -> Option<T> {
        let previous = self.data.insert(player, value);
        if previous.is_none() {
            self.order.push(player);
        }
        previous
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(&player)
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(&player)
    }

    /// Check whether a player is registered.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.data.contains_key(&player)
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over (PlayerId, &T) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.order
            .iter()
            .filter_map(move |id| self.data.get(id).map(|value| (*id, value)))
    }

    /// Iterate over player ids in registration order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
