//! Classic board layout and a seeded match runner.

use log::info;

use crate::core::{GameConfig, GameRng, OvershootPolicy, PlayerId, Result};
use crate::game::{Game, TurnRecord};

/// Ladders as (from, to) square indices, 0-based.
pub const LADDERS: [(usize, usize); 8] = [
    (3, 13),
    (8, 30),
    (20, 41),
    (27, 83),
    (35, 43),
    (50, 66),
    (70, 90),
    (79, 99),
];

/// Snakes as (from, to) square indices, 0-based.
pub const SNAKES: [(usize, usize); 10] = [
    (15, 5),
    (46, 25),
    (48, 10),
    (55, 52),
    (61, 18),
    (63, 59),
    (86, 23),
    (92, 72),
    (94, 74),
    (97, 77),
];

/// Configuration for the classic board.
#[must_use]
pub fn classic_config() -> GameConfig {
    LADDERS
        .iter()
        .chain(SNAKES.iter())
        .fold(GameConfig::default(), |config, &(from, to)| config.with_portal(from, to))
}

/// Builder for a `ClassicMatch`.
pub struct ClassicMatchBuilder {
    player_count: u32,
    overshoot: OvershootPolicy,
}

impl Default for ClassicMatchBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            overshoot: OvershootPolicy::Win,
        }
    }
}

impl ClassicMatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players; ids are assigned 0, 1, 2, ...
    pub fn player_count(mut self, count: u32) -> Self {
        self.player_count = count;
        self
    }

    pub fn overshoot(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }

    /// Build the match with a seeded die.
    pub fn build(self, seed: u64) -> Result<ClassicMatch> {
        let config = classic_config().with_overshoot(self.overshoot);
        let game = Game::from_config((0..self.player_count).map(PlayerId::new), &config)?;

        Ok(ClassicMatch {
            game,
            rng: GameRng::new(seed),
            dice_sides: config.dice_sides,
        })
    }
}

/// A classic match driven by a seeded die.
#[derive(Clone, Debug)]
pub struct ClassicMatch {
    game: Game,
    rng: GameRng,
    dice_sides: u32,
}

impl ClassicMatch {
    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The die used for rolls.
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Check whether at most one player is still racing.
    pub fn is_decided(&self) -> bool {
        self.game.is_over() || (self.game.players().len() > 1 && self.game.active_players() <= 1)
    }

    /// Roll for the current player and play their turn.
    pub fn step(&mut self) -> Result<TurnRecord> {
        let roll = self.rng.roll(self.dice_sides)?;
        self.game.play_turn(roll)
    }

    /// Play until the match is decided or `max_turns` turns have passed.
    ///
    /// Returns the finishing order.
    pub fn run_to_completion(&mut self, max_turns: usize) -> Result<Vec<PlayerId>> {
        let mut turns = 0;
        while !self.is_decided() && turns < max_turns {
            self.step()?;
            turns += 1;
        }

        if self.is_decided() {
            info!("classic match decided after {} turns", turns);
        } else {
            info!("stopping after {} turns without a result", turns);
        }
        Ok(self.finishing_order())
    }

    fn finishing_order(&self) -> Vec<PlayerId> {
        self.game.win_queue().iter().copied().collect()
    }
}
