//! Match controller and session tests.
//!
//! These drive whole matches through the public intent API, including
//! seeded random playouts for both gravity variants.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gravity_ttt::{
    scan, Cell, Coord, DrawReason, GravityDirection, Intent, Match, MatchConfig, MatchOutcome,
    MatchSnapshot, MoveError, Player, Session,
};

/// Cell `(r, c)` is X when `c / 2 + r` is even. No line of any direction
/// ever holds three equal symbols, so filling it never removes or wins.
fn no_triples_pattern() -> Vec<(Coord, Player)> {
    let mut cells = Vec::new();
    for r in 0..6 {
        for c in 0..6 {
            let player = if (c / 2 + r) % 2 == 0 { Player::A } else { Player::B };
            cells.push((Coord::new(r, c), player));
        }
    }
    cells
}

/// Interleave the pattern's X and O cells so A and B alternate.
fn alternating_fill() -> Vec<Coord> {
    let pattern = no_triples_pattern();
    let xs: Vec<Coord> = pattern.iter().filter(|(_, p)| *p == Player::A).map(|(c, _)| *c).collect();
    let os: Vec<Coord> = pattern.iter().filter(|(_, p)| *p == Player::B).map(|(c, _)| *c).collect();
    assert_eq!(xs.len(), os.len());

    xs.into_iter().zip(os).flat_map(|(x, o)| [x, o]).collect()
}

// =============================================================================
// Terminal conditions
// =============================================================================

/// Filling the board with no runs of three ends in a board-full draw.
#[test]
fn test_board_full_draw() {
    let mut game = Match::default();
    let order = alternating_fill();
    let last = order.len() - 1;

    for (i, coord) in order.into_iter().enumerate() {
        let report = game.place_piece(coord.row, coord.col).unwrap();
        assert_eq!(report.removed_cells().count(), 0);
        if i < last {
            assert_eq!(report.outcome, MatchOutcome::InProgress);
        } else {
            assert_eq!(report.outcome, MatchOutcome::Draw(DrawReason::BoardFull));
        }
    }

    assert!(game.board().is_full());
    assert_eq!(game.outcome(), MatchOutcome::Draw(DrawReason::BoardFull));
    assert!(game.legal_intents().is_empty());
}

/// A placement win records the winner and freezes the match.
#[test]
fn test_placement_win() {
    let mut game = Match::default();
    for (a, b) in [((2, 0), (5, 5)), ((2, 1), (5, 3)), ((2, 3), (0, 5))] {
        game.place_piece(a.0, a.1).unwrap();
        game.place_piece(b.0, b.1).unwrap();
    }

    let report = game.place_piece(2, 2).unwrap();
    assert_eq!(report.outcome, MatchOutcome::Won(Player::A));
    assert!(report.is_terminal());
    assert_eq!(game.turn_number(), 7);
    assert_eq!(game.current_player(), Player::A);

    let before = game.snapshot();
    assert_eq!(
        game.place_piece(4, 4),
        Err(MoveError::MatchOver { outcome: MatchOutcome::Won(Player::A) })
    );
    assert_eq!(game.snapshot(), before);
}

/// Triples of the opponent's pieces are removed by a placement too.
#[test]
fn test_placement_removes_any_triple() {
    let mut game = Match::default();
    game.place_piece(0, 0).unwrap(); // A
    game.place_piece(3, 0).unwrap(); // B
    game.place_piece(0, 1).unwrap(); // A
    game.place_piece(3, 1).unwrap(); // B
    game.place_piece(5, 5).unwrap(); // A
    let report = game.place_piece(3, 2).unwrap(); // B completes a triple

    let mut removed: Vec<Coord> = report.removed_cells().copied().collect();
    removed.sort();
    assert_eq!(removed, vec![Coord::new(3, 0), Coord::new(3, 1), Coord::new(3, 2)]);
    assert_eq!(game.board().count(Player::B), 0);
    assert_eq!(game.board().count(Player::A), 3);
}

// =============================================================================
// Gravity
// =============================================================================

/// Gravity in the rights-limited variant consumes the player's right and
/// the turn.
#[test]
fn test_gravity_rights_limited() {
    let mut game = Match::new(MatchConfig::rights_limited()).unwrap();
    game.place_piece(0, 0).unwrap(); // A
    let report = game.invoke_gravity(GravityDirection::Down).unwrap(); // B

    assert_eq!(report.player, Player::B);
    assert_eq!(report.board.get(Coord::new(5, 0)), Cell::Occupied(Player::A));
    assert_eq!(game.last_gravity_direction(), Some(GravityDirection::Down));
    assert_eq!(game.current_player(), Player::A);

    game.invoke_gravity(GravityDirection::Up).unwrap(); // A
    assert_eq!(
        game.invoke_gravity(GravityDirection::Left),
        Err(MoveError::GravityExhausted { player: Player::B })
    );
}

/// Gravity builds a cascade that ends in a win for the piece owner.
#[test]
fn test_gravity_win_through_match() {
    let mut game = Match::new(MatchConfig::cascade_variant()).unwrap();
    // A holds one piece in each of columns 0-3; down-gravity lines them up.
    game.place_piece(0, 0).unwrap(); // A
    game.place_piece(0, 5).unwrap(); // B
    game.place_piece(1, 2).unwrap(); // A
    game.place_piece(1, 5).unwrap(); // B
    game.place_piece(3, 1).unwrap(); // A
    game.place_piece(3, 4).unwrap(); // B
    game.place_piece(2, 3).unwrap(); // A

    let report = game.invoke_gravity(GravityDirection::Down).unwrap(); // B
    assert_eq!(report.outcome, MatchOutcome::Won(Player::A));
    assert_eq!(report.board.to_string().lines().last(), Some("XXXXOO"));
    assert_eq!(report.winning_runs.len(), 1);
}

// =============================================================================
// History and snapshots
// =============================================================================

/// Replaying the recorded history on a fresh match reproduces the board.
#[test]
fn test_history_replay() {
    let mut game = Match::new(MatchConfig::cascade_variant()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..20 {
        let intents = game.legal_intents();
        let Some(&intent) = intents.choose(&mut rng) else {
            break;
        };
        game.apply(intent).unwrap();
    }

    let mut replay = Match::new(MatchConfig::cascade_variant()).unwrap();
    for record in game.history() {
        assert_eq!(record.player, replay.current_player());
        assert_eq!(record.turn, replay.turn_number());
        replay.apply(record.intent).unwrap();
    }

    assert_eq!(replay.snapshot(), game.snapshot());
}

#[test]
fn test_snapshot_serialization() {
    let mut game = Match::default();
    game.place_piece(1, 1).unwrap();
    game.invoke_gravity(GravityDirection::Right).unwrap();

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}

#[test]
fn test_turn_report_serialization() {
    let mut game = Match::default();
    let report = game.invoke_gravity(GravityDirection::Up).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"up\""));
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_session_tracks_draws() {
    let mut session = Session::new(MatchConfig::rights_limited()).unwrap();
    for coord in alternating_fill() {
        session.place_piece(coord.row, coord.col).unwrap();
    }
    assert_eq!(session.scores().draws, 1);

    session.reset();
    assert_eq!(session.game().outcome(), MatchOutcome::InProgress);
    assert_eq!(session.scores().matches_played(), 1);
}

// =============================================================================
// Random playouts
// =============================================================================

fn random_playout(config: MatchConfig, seed: u64) -> Match {
    const MAX_TURNS: usize = 400;

    let mut game = Match::new(config).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..MAX_TURNS {
        let intents = game.legal_intents();
        let Some(&intent) = intents.choose(&mut rng) else {
            break;
        };

        let mover = game.current_player();
        let report = game.apply(intent).unwrap();

        assert_eq!(report.player, mover);
        assert_eq!(&report.board, game.board());

        let classification = scan(game.board());
        match report.outcome {
            MatchOutcome::InProgress => {
                // Every non-terminal turn leaves nothing to win or remove.
                assert!(classification.is_settled(), "unsettled board:\n{}", game.board());
                assert_eq!(game.current_player(), mover.opponent());
            }
            MatchOutcome::Won(winner) => {
                assert_eq!(classification.winners.as_slice(), &[winner]);
            }
            MatchOutcome::Draw(DrawReason::SimultaneousWin) => {
                assert!(intent.is_gravity());
                assert_eq!(classification.winners.len(), 2);
            }
            MatchOutcome::Draw(DrawReason::BoardFull) => {
                assert!(game.board().is_full());
            }
        }
    }

    game
}

#[test]
fn test_random_playouts_rights_limited() {
    for seed in 0..50 {
        let game = random_playout(MatchConfig::rights_limited(), seed);
        let gravity_moves = game
            .history()
            .iter()
            .filter(|r| r.intent.is_gravity())
            .count();
        assert!(gravity_moves <= 2, "seed {seed}: {gravity_moves} gravity moves");
    }
}

#[test]
fn test_random_playouts_cascade_variant() {
    let mut finished = 0;
    for seed in 0..50 {
        let game = random_playout(MatchConfig::cascade_variant(), seed);
        if game.is_over() {
            finished += 1;
            assert!(game.legal_intents().is_empty());
        }
    }
    assert!(finished > 0);
}

/// The same seed yields the same match.
#[test]
fn test_random_playout_is_deterministic() {
    let a = random_playout(MatchConfig::cascade_variant(), 99);
    let b = random_playout(MatchConfig::cascade_variant(), 99);
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.history(), b.history());
}

#[test]
fn test_rejected_intent_is_reported() {
    let mut game = Match::default();
    game.place_piece(2, 2).unwrap();
    assert_eq!(
        game.apply(Intent::place(2, 2)),
        Err(MoveError::OccupiedCell { coord: Coord::new(2, 2) })
    );
    assert_eq!(game.current_player(), Player::B);
}
