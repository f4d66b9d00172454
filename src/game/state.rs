//! The match state machine.
//!
//! ## Turn Protocol
//!
//! Each turn is three calls, in order:
//!
//! 1. `advance_player` moves the player by the roll and returns the
//!    effects of the tile they landed on
//! 2. `process_effects` applies those effects
//! 3. `update_queues` drops finished players and passes the turn on
//!
//! The split lets a renderer show the move before its effects. The
//! engine assumes one turn in flight per `Game`; a service exposing it
//! must serialize calls per match.
//!
//! ## Snapshots
//!
//! Queues and history are `im` persistent structures, so cloning a
//! `Game` between steps is cheap.

use im::Vector;
use log::{debug, info, warn};

use crate::board::Grid;
use crate::core::{
    GameConfig, GameError, OvershootPolicy, PlayerGameData, PlayerId, PlayerMap, Point, Result,
};
use crate::effects::{Effect, EffectBatch, EffectResolver, ResolveResult};

use super::turn::{TurnPhase, TurnRecord};

/// A single match.
///
/// Constructed once per match and discarded afterwards; there is no reset.
#[derive(Clone, Debug)]
pub struct Game {
    players: PlayerMap<PlayerGameData>,
    grid: Grid,
    overshoot: OvershootPolicy,
    max_roll: Option<u32>,
    turn_queue: Vector<PlayerId>,
    current: PlayerId,
    win_queue: Vector<PlayerId>,
    phase: TurnPhase,
    history: Vector<TurnRecord>,
}

impl Game {
    /// Create a match. Every player starts on square 0 and the first id
    /// takes the first turn.
    ///
    /// ## Defaults
    ///
    /// - `overshoot`: `OvershootPolicy::Win`
    /// - no upper bound on roll values
    pub fn new(player_ids: impl IntoIterator<Item = PlayerId>, grid: Grid) -> Result<Self> {
        let start = grid.square_to_point(0)?;
        let mut players = PlayerMap::new();
        let mut turn_queue = Vector::new();

        for id in player_ids {
            if players.insert(id, PlayerGameData::new(id, start)).is_some() {
                return Err(GameError::DuplicatePlayer(id));
            }
            turn_queue.push_back(id);
        }

        let current = *turn_queue.front().ok_or(GameError::NoPlayers)?;
        debug!("new game with {} players on a {}x{} board", players.len(), grid.width(), grid.height());

        Ok(Self {
            players,
            grid,
            overshoot: OvershootPolicy::default(),
            max_roll: None,
            turn_queue,
            current,
            win_queue: Vector::new(),
            phase: TurnPhase::AwaitingRoll,
            history: Vector::new(),
        })
    }

    /// Create a match from a configuration.
    ///
    /// Rolls above `config.dice_sides` are rejected.
    pub fn from_config(player_ids: impl IntoIterator<Item = PlayerId>, config: &GameConfig) -> Result<Self> {
        let grid = config.build_grid()?;
        Ok(Self::new(player_ids, grid)?
            .with_overshoot(config.overshoot)
            .with_max_roll(config.dice_sides))
    }

    /// Set the overshoot rule.
    #[must_use]
    pub fn with_overshoot(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }

    /// Reject rolls above `max_roll`.
    #[must_use]
    pub fn with_max_roll(mut self, max_roll: u32) -> Self {
        self.max_roll = Some(max_roll);
        self
    }

    // === Queries ===

    /// All registered players, in registration order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerGameData> {
        &self.players
    }

    /// One player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerGameData> {
        self.players.get(player)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Finished players, in finishing order.
    #[must_use]
    pub fn win_queue(&self) -> &Vector<PlayerId> {
        &self.win_queue
    }

    /// Players still taking turns, in turn order.
    #[must_use]
    pub fn turn_queue(&self) -> &Vector<PlayerId> {
        &self.turn_queue
    }

    /// Number of players still taking turns.
    #[must_use]
    pub fn active_players(&self) -> usize {
        self.turn_queue.len()
    }

    /// Check whether a player has finished.
    #[must_use]
    pub fn has_won(&self, player: PlayerId) -> bool {
        self.win_queue.iter().any(|p| *p == player)
    }

    /// Check whether every player has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn_queue.is_empty()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn overshoot(&self) -> OvershootPolicy {
        self.overshoot
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Every advance made so far.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Linear square index of a player.
    pub fn square_of(&self, player: PlayerId) -> Result<usize> {
        let data = self.player_data(player)?;
        self.grid.point_to_square(data.position())
    }

    // === Turn Protocol ===

    /// Move a player forward by `roll` squares.
    ///
    /// Returns the effects of the tile the player landed on; nothing but
    /// the mover's position changes here. A landing that finishes the
    /// board puts the player in the win queue and produces no effects.
    pub fn advance_player(&mut self, player: PlayerId, roll: u32) -> Result<EffectBatch> {
        self.advance(player, roll).map(|(effects, _)| effects)
    }

    fn advance(&mut self, player: PlayerId, roll: u32) -> Result<(EffectBatch, TurnRecord)> {
        let from = self.player_data(player)?.position();
        if roll == 0 || self.max_roll.is_some_and(|max| roll > max) {
            return Err(GameError::InvalidRollValue(roll));
        }
        if self.phase != TurnPhase::AwaitingRoll {
            warn!("advancing {} while {}", player, self.phase.name());
        }
        if player != self.current {
            warn!("advancing {} out of turn (current is {})", player, self.current);
        }

        let final_square = self.grid.final_square();
        let target = self.grid.point_to_square(from)? + roll as usize;

        let (landed_square, won) = match self.overshoot {
            _ if target == final_square => (final_square, true),
            OvershootPolicy::Win if target > final_square => (final_square, true),
            OvershootPolicy::Stay if target > final_square => {
                debug!("{} rolled {} past the final square, staying put", player, roll);
                (target - roll as usize, false)
            }
            _ => (target, false),
        };

        let landed = self.grid.square_to_point(landed_square)?;
        self.set_position(player, landed);
        debug!("{} rolled {} and moved from {} to {}", player, roll, from, landed);

        let effects = if won || landed == from {
            EffectBatch::new()
        } else {
            self.grid.tile_at(landed).effects(player, None)
        };

        if won {
            self.record_win(player);
        }

        let record = TurnRecord {
            player,
            roll,
            from,
            landed,
            resolved: landed,
            won,
        };
        self.history.push_back(record.clone());
        self.phase = TurnPhase::AwaitingResolution;

        Ok((effects, record))
    }

    /// Apply effects returned by `advance_player`, in order.
    ///
    /// Fails without changing anything if an effect references an unknown
    /// player or moves someone off the board. A player moved onto the
    /// final square by an effect finishes.
    pub fn process_effects(
        &mut self,
        player: PlayerId,
        effects: &EffectBatch,
    ) -> Result<Vec<ResolveResult>> {
        self.player_data(player)?;
        if self.phase != TurnPhase::AwaitingResolution {
            warn!("processing effects for {} while {}", player, self.phase.name());
        }

        for effect in effects {
            if let Effect::MoveTo { destination, .. } = effect {
                if !self.grid.contains(*destination) {
                    return Err(GameError::PointOutOfBounds(*destination));
                }
            }
        }
        let results = EffectResolver::resolve_batch(&mut self.players, effects)?;

        let final_point = self.grid.square_to_point(self.grid.final_square())?;
        let touched: Vec<PlayerId> = effects.iter().flat_map(|e| e.players()).collect();
        for id in touched {
            let at_final = self.players.get(id).is_some_and(|d| d.position() == final_point);
            if at_final && !self.has_won(id) {
                self.record_win(id);
            }
        }

        let (resolved, won) = self.outcome(player)?;
        if let Some(record) = self.history.back_mut() {
            if record.player == player {
                record.resolved = resolved;
                record.won |= won;
            }
        }

        debug!("{} resolved {} effects, now at {}", player, results.len(), resolved);
        self.phase = TurnPhase::AwaitingRotation;
        Ok(results)
    }

    /// Drop finished players from the rotation and pass the turn on.
    ///
    /// When no players remain the match is over and `current` keeps the
    /// last player who moved.
    pub fn update_queues(&mut self) {
        if self.phase != TurnPhase::AwaitingRotation {
            warn!("rotating turn while {}", self.phase.name());
        }

        let len = self.turn_queue.len();
        let start = self
            .turn_queue
            .iter()
            .position(|p| *p == self.current)
            .unwrap_or(0);

        let next = (1..=len)
            .map(|offset| self.turn_queue[(start + offset) % len])
            .find(|p| !self.has_won(*p));

        let win_queue = &self.win_queue;
        self.turn_queue = self
            .turn_queue
            .iter()
            .filter(|p| !win_queue.iter().any(|w| w == *p))
            .copied()
            .collect();

        match next {
            Some(next) => {
                debug!("turn passes from {} to {}", self.current, next);
                self.current = next;
                self.phase = TurnPhase::AwaitingRoll;
            }
            None => {
                info!("match over, finishing order {:?}", self.win_queue);
                self.phase = TurnPhase::Finished;
            }
        }
    }

    /// Run a whole turn for the current player.
    pub fn play_turn(&mut self, roll: u32) -> Result<TurnRecord> {
        let player = self.current;
        let (effects, mut record) = self.advance(player, roll)?;
        self.process_effects(player, &effects)?;
        let (resolved, won) = self.outcome(player)?;
        record.resolved = resolved;
        record.won |= won;
        self.update_queues();

        Ok(record)
    }

    // === Internals ===

    fn player_data(&self, player: PlayerId) -> Result<&PlayerGameData> {
        self.players
            .get(player)
            .ok_or(GameError::InvalidPlayerReference(player))
    }

    /// Position after effects, and whether the player has finished.
    fn outcome(&self, player: PlayerId) -> Result<(Point, bool)> {
        Ok((self.player_data(player)?.position(), self.has_won(player)))
    }

    fn set_position(&mut self, player: PlayerId, position: Point) {
        if let Some(data) = self.players.get_mut(player) {
            data.set_position(position);
        }
    }

    fn record_win(&mut self, player: PlayerId) {
        if !self.has_won(player) {
            info!("{} finished in place {}", player, self.win_queue.len() + 1);
            self.win_queue.push_back(player);
        }
    }
}
