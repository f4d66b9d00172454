//! Turn protocol integration tests.
//!
//! These tests drive `Game` through advance → resolve → rotate the way a
//! renderer does, checking the state visible between each step.

use ladder_board::board::{Grid, PortalTile, SwapCard};
use ladder_board::core::{GameConfig, GameError, OvershootPolicy, PlayerId, Point};
use ladder_board::effects::{Effect, EffectBatch, ResolveResult};
use ladder_board::game::{Game, TurnPhase};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn players(ids: &[u32]) -> Vec<PlayerId> {
    ids.iter().copied().map(PlayerId::new).collect()
}

fn position(game: &Game, id: u32) -> Point {
    game.player(PlayerId::new(id)).unwrap().position()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

/// Two players on a 10x10 board: P0 rolls 6, P1 rolls 12.
#[test]
fn test_reference_scenario() {
    init_logging();
    let mut game = Game::new(players(&[0, 1]), Grid::new(10, 10).unwrap()).unwrap();

    assert_eq!(position(&game, 0), Point::new(0, 0));
    assert_eq!(position(&game, 1), Point::new(0, 0));

    let effects = game.advance_player(PlayerId::new(0), 6).unwrap();
    game.process_effects(PlayerId::new(0), &effects).unwrap();
    game.update_queues();

    assert_eq!(position(&game, 0), Point::new(6, 0));
    assert_eq!(game.grid().square_label(position(&game, 0)).unwrap(), 7);
    assert_eq!(game.current(), PlayerId::new(1));

    let effects = game.advance_player(PlayerId::new(1), 12).unwrap();
    game.process_effects(PlayerId::new(1), &effects).unwrap();
    game.update_queues();

    assert_eq!(position(&game, 1), Point::new(7, 1));
    assert_eq!(game.current(), PlayerId::new(0));
}

/// A portal on square 5 leading to square 50 ends the turn on square 50.
#[test]
fn test_portal_scenario() {
    init_logging();
    let config = GameConfig::new().with_portal(5, 50);
    let mut game = Game::from_config(players(&[0, 1]), &config).unwrap();

    let effects = game.advance_player(PlayerId::new(0), 5).unwrap();

    // Between steps the player is visibly on the portal square
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 5);
    assert_eq!(game.phase(), TurnPhase::AwaitingResolution);

    game.process_effects(PlayerId::new(0), &effects).unwrap();
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 50);

    game.update_queues();
    assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 50);
}

/// Portal chains do not recurse: the destination tile is not triggered.
#[test]
fn test_portal_destination_not_triggered() {
    init_logging();
    let config = GameConfig::new()
        .with_portal(5, 50)
        .with_portal(50, 2)
        .with_portal(2, 5);
    let mut game = Game::from_config(players(&[0]), &config).unwrap();

    let effects = game.advance_player(PlayerId::new(0), 5).unwrap();
    assert_eq!(effects.len(), 1);

    let results = game.process_effects(PlayerId::new(0), &effects).unwrap();

    assert_eq!(results, vec![ResolveResult::Success]);
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 50);
}

/// Landing exactly on a square moves past it otherwise.
#[test]
fn test_portal_only_on_exact_landing() {
    let config = GameConfig::new().with_portal(5, 50);
    let mut game = Game::from_config(players(&[0]), &config).unwrap();

    game.play_turn(4).unwrap();
    game.play_turn(2).unwrap();

    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 6);
}

// =============================================================================
// Swap Cards
// =============================================================================

/// An untargeted swap card swaps the mover with itself and changes nothing.
#[test]
fn test_untargeted_swap_is_noop() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.add_tile(SwapCard::ladder(Point::new(3, 0))).unwrap();
    let mut game = Game::new(players(&[0, 1]), grid).unwrap();

    let effects = game.advance_player(PlayerId::new(0), 3).unwrap();
    let results = game.process_effects(PlayerId::new(0), &effects).unwrap();

    assert_eq!(results, vec![ResolveResult::Skipped]);
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 3);
    assert_eq!(game.square_of(PlayerId::new(1)).unwrap(), 0);
}

/// Applying a targeted swap twice restores both positions.
#[test]
fn test_swap_involution() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.add_tile(SwapCard::snake(Point::new(8, 0)).with_target(PlayerId::new(1)))
        .unwrap();
    let mut game = Game::new(players(&[0, 1]), grid).unwrap();

    game.play_turn(3).unwrap(); // P0 -> 3
    game.play_turn(15).unwrap(); // P1 -> 15
    let effects = game.advance_player(PlayerId::new(0), 5).unwrap(); // P0 -> 8

    game.process_effects(PlayerId::new(0), &effects).unwrap();
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 15);
    assert_eq!(game.square_of(PlayerId::new(1)).unwrap(), 8);

    game.process_effects(PlayerId::new(0), &effects).unwrap();
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 8);
    assert_eq!(game.square_of(PlayerId::new(1)).unwrap(), 15);
}

/// Effects referencing an unregistered player fail without side effects.
#[test]
fn test_effect_application_failure() {
    let mut game = Game::new(players(&[0, 1]), Grid::new(10, 10).unwrap()).unwrap();
    game.play_turn(4).unwrap();

    let batch: EffectBatch = [
        Effect::move_to(PlayerId::new(0), Point::new(9, 9)),
        Effect::swap(PlayerId::new(0), PlayerId::new(42)),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        game.process_effects(PlayerId::new(0), &batch),
        Err(GameError::EffectApplicationFailure(PlayerId::new(42)))
    );
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 4);
}

/// A move off the board is rejected and the match keeps going.
#[test]
fn test_off_board_destination_rejected() {
    init_logging();
    let mut game = Game::new(players(&[0, 1]), Grid::new(10, 10).unwrap()).unwrap();
    let batch = EffectBatch::single(Effect::move_to(PlayerId::new(0), Point::new(50, 50)));

    assert_eq!(
        game.process_effects(PlayerId::new(0), &batch),
        Err(GameError::PointOutOfBounds(Point::new(50, 50)))
    );
    assert_eq!(position(&game, 0), Point::ORIGIN);

    // Both players can still take their turns
    game.play_turn(3).unwrap();
    game.play_turn(2).unwrap();
    let record = game.play_turn(1).unwrap();
    assert_eq!(record.player, PlayerId::new(0));
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 4);
}

/// Unknown effect kinds are skipped.
#[test]
fn test_custom_effect_fails_closed() {
    init_logging();
    let mut game = Game::new(players(&[0, 1]), Grid::new(10, 10).unwrap()).unwrap();
    let before = game.players().clone();

    let results = game
        .process_effects(PlayerId::new(0), &EffectBatch::single(Effect::custom("earthquake")))
        .unwrap();

    assert_eq!(results, vec![ResolveResult::Skipped]);
    assert_eq!(game.players(), &before);
}

// =============================================================================
// Turn Order and Winning
// =============================================================================

/// Non-contiguous ids rotate in registration order.
#[test]
fn test_opaque_player_ids() {
    let mut game = Game::new(players(&[900, 17, 4031]), Grid::new(10, 10).unwrap()).unwrap();

    let mut order = Vec::new();
    for _ in 0..4 {
        order.push(game.current());
        game.play_turn(1).unwrap();
    }

    assert_eq!(order, players(&[900, 17, 4031, 900]));
}

/// A winner leaves the rotation and is recorded once.
#[test]
fn test_winner_leaves_rotation() {
    init_logging();
    let mut game = Game::new(players(&[0, 1, 2]), Grid::new(4, 4).unwrap()).unwrap();

    game.play_turn(15).unwrap(); // P0 finishes
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(game.current());
        game.play_turn(1).unwrap();
    }

    assert!(!seen.contains(&PlayerId::new(0)));
    assert_eq!(game.win_queue().len(), 1);
    assert_eq!(game.players().len(), 3);
}

/// Finishing order is recorded in the win queue.
#[test]
fn test_finishing_order() {
    let mut game = Game::new(players(&[0, 1, 2]), Grid::new(3, 3).unwrap()).unwrap();

    game.play_turn(2).unwrap(); // P0 -> 2
    game.play_turn(8).unwrap(); // P1 wins
    game.play_turn(3).unwrap(); // P2 -> 3
    game.play_turn(7).unwrap(); // P0 wins (overshoot)
    game.play_turn(5).unwrap(); // P2 wins

    let order: Vec<_> = game.win_queue().iter().copied().collect();
    assert_eq!(order, players(&[1, 0, 2]));
    assert!(game.is_over());
    assert_eq!(game.phase(), TurnPhase::Finished);
}

/// With `Stay`, an overshooting roll leaves the player in place.
#[test]
fn test_stay_policy_requires_exact_roll() {
    let config = GameConfig::new()
        .with_size(3, 3)
        .with_overshoot(OvershootPolicy::Stay)
        .with_dice_sides(20);
    let mut game = Game::from_config(players(&[0]), &config).unwrap();

    let record = game.play_turn(9).unwrap();
    assert!(!record.won);
    assert_eq!(game.square_of(PlayerId::new(0)).unwrap(), 0);

    let record = game.play_turn(8).unwrap();
    assert!(record.won);
}

/// The turn log mirrors what a renderer would print.
#[test]
fn test_history_log() {
    let config = GameConfig::new().with_portal(5, 50);
    let mut game = Game::from_config(players(&[0, 1]), &config).unwrap();

    game.play_turn(5).unwrap();
    game.play_turn(3).unwrap();

    let log: Vec<String> = game
        .history()
        .iter()
        .map(|r| {
            format!(
                "{} rolled a {} and moved to Square {}",
                r.player,
                r.roll,
                game.grid().square_label(r.resolved).unwrap()
            )
        })
        .collect();

    assert_eq!(
        log,
        vec![
            "Player 0 rolled a 5 and moved to Square 51",
            "Player 1 rolled a 3 and moved to Square 4",
        ]
    );
}

/// Tiles cannot conflict, whether placed directly or via config.
#[test]
fn test_tile_placement_conflict() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.add_tile(PortalTile::new(Point::new(1, 1), Point::new(0, 0))).unwrap();

    assert_eq!(
        grid.add_tile(SwapCard::new(Point::new(1, 1))),
        Err(GameError::TilePlacementConflict(Point::new(1, 1)))
    );

    let config = GameConfig::new().with_portal(7, 1).with_portal(7, 2);
    assert!(matches!(
        Game::from_config(players(&[0]), &config),
        Err(GameError::TilePlacementConflict(_))
    ));
}
