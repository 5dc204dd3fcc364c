//! Session tests - full turns through GameSession

use blockgrid::core::SimpleRng;
use blockgrid::engine::{GameSession, PlaceError, RulesConfig, RulesEngine};
use blockgrid::types::{ItemKind, PieceType};

fn session(config: RulesConfig, seed: u32) -> GameSession {
    let engine = RulesEngine::new(config, SimpleRng::new(seed)).unwrap();
    GameSession::new(engine).unwrap()
}

fn rainbow_only() -> RulesConfig {
    RulesConfig {
        rainbow_probability: 1.0,
        ..RulesConfig::default()
    }
}

#[test]
fn test_two_rainbows_clear_a_row() {
    let mut s = session(rainbow_only(), 1);
    assert!(s.pieces().iter().all(|p| p.piece_type == PieceType::Rainbow));

    let first = s.place(0, 0, 0).unwrap();
    assert_eq!(first.placement_points, 50);
    assert!(first.lines.is_empty());

    let second = s.place(1, 0, 5).unwrap();
    assert_eq!(second.lines.rows, vec![0]);
    assert_eq!(second.lines.score, 1000);
    assert_eq!(s.score(), 50 + 50 + 1000);
    assert!(s.grid().is_empty());
}

#[test]
fn test_overlap_is_rejected_without_side_effects() {
    let mut s = session(rainbow_only(), 2);
    s.place(0, 3, 0).unwrap();
    let grid = s.grid().clone();
    let score = s.score();

    let err = s.place(1, 3, 2).unwrap_err();
    assert_eq!(err, PlaceError::Blocked);
    assert_eq!(err.code(), "invalid_place");
    assert_eq!(s.grid(), &grid);
    assert_eq!(s.score(), score);
    assert!(!s.pieces()[1].is_placed());
}

#[test]
fn test_refill_when_turn_is_used_up() {
    let config = RulesConfig {
        max_pieces_per_turn: 2,
        ..rainbow_only()
    };
    let mut s = session(config, 3);
    assert!(!s.place(0, 0, 0).unwrap().refilled);
    let outcome = s.place(1, 1, 0).unwrap();
    assert!(outcome.refilled);
    assert_eq!(s.pieces().len(), 2);
    assert!(s.pieces().iter().all(|p| !p.is_placed()));
}

#[test]
fn test_game_over_when_nothing_fits() {
    // a five-cell rainbow line never fits on a 4x4 board
    let config = RulesConfig {
        board_size: 4,
        ..rainbow_only()
    };
    let mut s = session(config, 4);
    assert!(s.is_game_over());
    assert_eq!(s.place(0, 0, 0), Err(PlaceError::GameOver));
}

#[test]
fn test_red_placement_earns_bomb_and_bomb_clears() {
    let config = RulesConfig {
        rainbow_probability: 0.0,
        red_pieces_for_bomb: 1,
        ..RulesConfig::default()
    };
    // find a deal whose first piece is red
    let mut s = (1..500)
        .map(|seed| session(config.clone(), seed))
        .find(|s| s.pieces()[0].is_red())
        .expect("some seed deals a red piece first");

    let cells = s.pieces()[0].shape.cell_count();
    let placed = s.place(0, 3, 3).unwrap();
    assert_eq!(placed.bombs_awarded, 1);
    assert_eq!(s.red_pieces_placed(), 1);
    assert_eq!(s.inventory().count(ItemKind::Bomb.as_str()), 1);

    let score = s.score();
    let blast = s.use_bomb(5, 5).unwrap();
    assert_eq!(blast.destroyed.len(), cells);
    assert_eq!(blast.points, 10 * cells as u32);
    assert_eq!(s.score(), score + blast.points);
    assert!(s.grid().is_empty());
    assert_eq!(s.inventory().count(ItemKind::Bomb.as_str()), 0);
    assert_eq!(s.use_bomb(5, 5), Err(PlaceError::NoBombAvailable));
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut s = session(RulesConfig::default(), seed);
        let _ = s.place(0, 0, 0);
        let _ = s.place(1, 5, 5);
        (s.grid().to_pattern(), s.score())
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_default_deals_are_mostly_normal() {
    let mut engine = RulesEngine::seeded(12345).unwrap();
    let pieces = engine.initialize_turn_pieces(300).unwrap();
    let normal = pieces
        .iter()
        .filter(|p| p.piece_type == PieceType::Normal)
        .count();
    assert!(normal >= 240, "only {normal}/300 normal pieces");
    assert!(pieces.iter().any(|p| p.is_red()));
}

#[test]
fn test_extreme_drag_is_blocked() {
    let mut s = session(RulesConfig::default(), 9);
    assert_eq!(s.place(0, 0, i32::MAX), Err(PlaceError::Blocked));
    assert_eq!(s.place(0, i32::MIN, 0), Err(PlaceError::Blocked));
    assert!(s.grid().is_empty());
}
