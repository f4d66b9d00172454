//! Effect resolution - applying effects to player state.
//!
//! The resolver works on the player map alone. It has no access to the
//! grid, so a `MoveTo` can never land on and trigger another tile during
//! the same pass.

use log::{debug, warn};

use crate::core::{GameError, PlayerGameData, PlayerId, PlayerMap, Point, Result};

use super::{Effect, EffectBatch};

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect applied.
    Success,
    /// Effect was ignored (unknown kind or a no-op).
    Skipped,
}

/// Applies effects to player state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a batch of effects in order.
    ///
    /// Every player reference is checked before anything is written, so
    /// an `EffectApplicationFailure` leaves the players untouched.
    pub fn resolve_batch(
        players: &mut PlayerMap<PlayerGameData>,
        batch: &EffectBatch,
    ) -> Result<Vec<ResolveResult>> {
        Self::validate(players, batch)?;

        batch
            .iter()
            .map(|effect| Self::resolve_single(players, effect))
            .collect()
    }

    /// Check that every referenced player exists.
    pub fn validate(players: &PlayerMap<PlayerGameData>, batch: &EffectBatch) -> Result<()> {
        for effect in batch {
            if let Some(missing) = effect.players().into_iter().find(|p| !players.contains(*p)) {
                return Err(GameError::EffectApplicationFailure(missing));
            }
        }
        Ok(())
    }

    /// Resolve a single effect.
    pub fn resolve_single(
        players: &mut PlayerMap<PlayerGameData>,
        effect: &Effect,
    ) -> Result<ResolveResult> {
        match effect {
            Effect::MoveTo { player, destination } => {
                let data = players
                    .get_mut(*player)
                    .ok_or(GameError::EffectApplicationFailure(*player))?;
                debug!("{} moved from {} to {}", player, data.position(), destination);
                data.set_position(*destination);
                Ok(ResolveResult::Success)
            }

            Effect::Swap { first, second } => {
                // Read both positions before writing either
                let first_pos = Self::position_of(players, *first)?;
                let second_pos = Self::position_of(players, *second)?;

                if first == second {
                    debug!("{} swapped with itself", first);
                    return Ok(ResolveResult::Skipped);
                }

                if let Some(data) = players.get_mut(*first) {
                    data.set_position(second_pos);
                }
                if let Some(data) = players.get_mut(*second) {
                    data.set_position(first_pos);
                }
                debug!("{} at {} swapped with {} at {}", first, first_pos, second, second_pos);
                Ok(ResolveResult::Success)
            }

            Effect::Custom { kind } => {
                warn!("ignoring effect of unknown kind {:?}", kind);
                Ok(ResolveResult::Skipped)
            }
        }
    }

    fn position_of(
        players: &PlayerMap<PlayerGameData>,
        player: PlayerId,
    ) -> Result<Point> {
        players
            .get(player)
            .map(PlayerGameData::position)
            .ok_or(GameError::EffectApplicationFailure(player))
    }
}
