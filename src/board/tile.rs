//! Special squares.
//!
//! A `Tile` is a closed set of variants with one dispatch function,
//! `Tile::effects`, mapping a landing to the effects it produces. New tile
//! kinds are added as variants here.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Point};
use crate::effects::{Effect, EffectBatch};

/// Teleports the landing player to a fixed destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalTile {
    /// Square that triggers the portal.
    pub at: Point,
    /// Where the player ends up.
    pub destination: Point,
}

impl PortalTile {
    /// Create a portal from `at` to `destination`.
    #[must_use]
    pub const fn new(at: Point, destination: Point) -> Self {
        Self { at, destination }
    }
}

/// Board placement label for a swap card. Behavior is identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapKind {
    #[default]
    Plain,
    Ladder,
    Snake,
}

/// Exchanges the landing player's position with another player.
///
/// The partner is, in order of preference: the `other` player passed at
/// landing time, the card's own `target`, then the landing player itself.
/// The last case is a self-swap and leaves the board unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCard {
    pub at: Point,
    pub kind: SwapKind,
    pub target: Option<PlayerId>,
}

impl SwapCard {
    /// Create an untargeted swap card.
    #[must_use]
    pub const fn new(at: Point) -> Self {
        Self {
            at,
            kind: SwapKind::Plain,
            target: None,
        }
    }

    /// Create a card placed as a ladder.
    #[must_use]
    pub const fn ladder(at: Point) -> Self {
        Self {
            at,
            kind: SwapKind::Ladder,
            target: None,
        }
    }

    /// Create a card placed as a snake.
    #[must_use]
    pub const fn snake(at: Point) -> Self {
        Self {
            at,
            kind: SwapKind::Snake,
            target: None,
        }
    }

    /// Set the default swap partner.
    #[must_use]
    pub const fn with_target(mut self, target: PlayerId) -> Self {
        self.target = Some(target);
        self
    }

    fn partner(&self, mover: PlayerId, other: Option<PlayerId>) -> PlayerId {
        other.or(self.target).unwrap_or(mover)
    }
}

/// A square's behavior when a player lands on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Ordinary square.
    #[default]
    Plain,
    Portal(PortalTile),
    Swap(SwapCard),
}

impl Tile {
    /// Effects produced when `mover` lands here.
    ///
    /// `other` names a second player for tiles that act on two players.
    #[must_use]
    pub fn effects(&self, mover: PlayerId, other: Option<PlayerId>) -> EffectBatch {
        match self {
            Tile::Plain => EffectBatch::new(),
            Tile::Portal(portal) => EffectBatch::single(Effect::move_to(mover, portal.destination)),
            Tile::Swap(card) => EffectBatch::single(Effect::swap(mover, card.partner(mover, other))),
        }
    }

    /// Square the tile is placed on, `None` for the plain default.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Tile::Plain => None,
            Tile::Portal(portal) => Some(portal.at),
            Tile::Swap(card) => Some(card.at),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Tile::Plain => "Plain",
            Tile::Portal(_) => "Portal",
            Tile::Swap(card) => match card.kind {
                SwapKind::Plain => "Swap",
                SwapKind::Ladder => "Ladder",
                SwapKind::Snake => "Snake",
            },
        }
    }
}

impl From<PortalTile> for Tile {
    fn from(portal: PortalTile) -> Self {
        Tile::Portal(portal)
    }
}

impl From<SwapCard> for Tile {
    fn from(card: SwapCard) -> Self {
        Tile::Swap(card)
    }
}
