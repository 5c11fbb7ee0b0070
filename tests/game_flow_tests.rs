//! Game Flow Integration Tests
//!
//! Drives sessions through the public API:
//! - Turn alternation and rejected moves
//! - Captures and the move log
//! - Puzzle walkthroughs, wrong answers and completion

use sinta_chess::game::components::{Piece, PieceColor, PieceType};
use sinta_chess::game::puzzle::PuzzleId;
use sinta_chess::game::session::parse_move;
use sinta_chess::game::types::Square;
use sinta_chess::game::{
    new_game, new_puzzle_game, GameError, GameState, MoveOutcome, RejectReason,
};

fn sq(text: &str) -> Square {
    Square::from_algebraic(text).expect("valid square")
}

/// Play `text` (e.g. "e2e4") and return the outcome
fn play(game: &mut GameState, text: &str) -> MoveOutcome {
    let (from, to) = parse_move(text).expect("valid move text");
    game.attempt_move(from, to)
}

fn rejection(outcome: MoveOutcome) -> Option<RejectReason> {
    match outcome {
        MoveOutcome::Rejected(reason) => Some(reason),
        MoveOutcome::Applied(_) => None,
    }
}

// ============================================================================
// Free Play Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let mut game = new_game(None).unwrap();

    assert_eq!(game.board.side_to_move(), PieceColor::White);
    assert_eq!(rejection(play(&mut game, "d7d5")), Some(RejectReason::NotYourTurn));
    assert!(play(&mut game, "e2e4").is_applied());
    assert_eq!(game.board.side_to_move(), PieceColor::Black);
    assert_eq!(rejection(play(&mut game, "d2d4")), Some(RejectReason::NotYourTurn));
}

#[test]
fn test_opening_sequence_and_log() {
    let mut game = GameState::free_play();

    assert!(play(&mut game, "e2e4").is_applied());
    assert!(play(&mut game, "d7d6").is_applied());
    assert_eq!(
        rejection(play(&mut game, "c1f4")),
        Some(RejectReason::Illegal),
        "d2 pawn blocks the bishop"
    );
    assert!(play(&mut game, "d2d4").is_applied());
    assert!(play(&mut game, "c8g4").is_applied());
    assert!(play(&mut game, "c1f4").is_applied());

    assert_eq!(game.board.notation, "e2e4 d7d6 d2d4 c8g4 c1f4 ");
    assert_eq!(game.board.pieces.len(), 32);
    assert_eq!(game.current_step, 0, "Free play has no script to step through");
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let mut game = GameState::free_play();
    let before = game.board.notation.clone();

    assert_eq!(rejection(play(&mut game, "e4e5")), Some(RejectReason::NoPiece));
    assert_eq!(rejection(play(&mut game, "e2e5")), Some(RejectReason::Illegal));
    assert_eq!(rejection(play(&mut game, "a1a2")), Some(RejectReason::Illegal));

    assert_eq!(game.board.notation, before);
    assert!(game.board.white_to_move);
    assert_eq!(game.board.get_piece_at(sq("e2")).unwrap().name, "whitePawn5");
}

#[test]
fn test_capture_removes_piece_and_marks_notation() {
    let mut game = GameState::free_play();

    for text in ["e2e4", "d7d5"] {
        assert!(play(&mut game, text).is_applied());
    }

    let MoveOutcome::Applied(applied) = play(&mut game, "e4d5") else {
        panic!("exd5 should be legal");
    };
    assert!(applied.player_move.is_capture);
    let captured = applied.captured.expect("a black pawn is captured");
    assert_eq!(captured.color, PieceColor::Black);
    assert!(!captured.is_alive);

    assert_eq!(game.board.pieces.len(), 31);
    assert_eq!(game.board.notation, "e2e4 d7d5 e4xd5 ");
    assert_eq!(game.board.get_piece_color(sq("d5")), Some(PieceColor::White));
}

#[test]
fn test_turns_can_be_disabled() {
    let mut game = GameState::free_play().with_turn_enforcement(false);

    assert!(play(&mut game, "e7e5").is_applied());
    assert!(play(&mut game, "d7d5").is_applied());
}

#[test]
fn test_select_lists_moves() {
    let mut game = GameState::free_play();

    let moves = game.select(sq("g1"));
    assert_eq!(moves, vec![sq("f3"), sq("h3")]);
    assert!(game.selected().is_some());

    assert!(game.select(sq("e4")).is_empty());
    assert!(game.selected().is_none());
}

// ============================================================================
// Puzzle Tests
// ============================================================================

#[test]
fn test_unknown_puzzle_is_recoverable() {
    let err = new_puzzle_game("fifth").unwrap_err();
    assert!(matches!(err, GameError::UnknownPuzzle { .. }));
    assert_eq!(err.to_string(), "Unknown puzzle: fifth");

    assert!(new_game(Some("nope")).is_err());
}

#[test]
fn test_puzzle_third_walkthrough() {
    let mut game = new_puzzle_game("third").unwrap();
    assert_eq!(game.current_step, 0);

    let MoveOutcome::Applied(first) = play(&mut game, "e2f3") else {
        panic!("scripted first move should be accepted");
    };
    assert_eq!(first.opponent_move.map(|m| m.to), Some(sq("b8")));
    assert_eq!(game.current_step, 1);
    assert!(game.board.white_to_move, "Scripted reply hands the move back");

    assert!(play(&mut game, "e3f4").is_applied());
    assert_eq!(game.current_step, 2);

    let MoveOutcome::Applied(last) = play(&mut game, "c4c5") else {
        panic!("final scripted move should be accepted");
    };
    assert!(last.solved);
    assert!(last.opponent_move.is_none());
    assert_eq!(game.current_step, 3);
    assert!(game.board.is_game_over);
    assert!(game.is_solved());
    assert_eq!(game.revealed_clue(), Some(3));
    assert_eq!(game.board.notation, "e2f3 a8b8 e3f4 b8c7 c4c5 ");

    assert_eq!(rejection(play(&mut game, "f4e5")), Some(RejectReason::GameOver));
}

#[test]
fn test_puzzle_wrong_move_is_rejected_without_advancing() {
    let mut game = GameState::for_puzzle(PuzzleId::First);

    assert_eq!(
        rejection(play(&mut game, "f2f3")),
        Some(RejectReason::WrongPuzzleMove),
        "A legal move that is not the scripted one"
    );
    assert_eq!(game.current_step, 0);
    assert!(game.board.notation.is_empty());

    assert!(play(&mut game, "f2b6").is_applied());
    assert_eq!(game.board.get_piece_at(sq("e5")).unwrap().name, "blackKing");
    assert!(play(&mut game, "b6b2").is_applied());
    assert_eq!(game.revealed_clue(), Some(43));
}

#[test]
fn test_puzzle_second_walkthrough() {
    let mut game = GameState::for_puzzle(PuzzleId::Second);

    assert!(play(&mut game, "e4f4").is_applied());
    assert!(!game.is_solved());
    assert!(play(&mut game, "f3g4").is_applied());
    assert!(game.is_solved());
    assert_eq!(game.revealed_clue(), Some(20));
}

#[test]
fn test_missing_reply_piece_hands_turn_back() {
    let mut game = GameState::for_puzzle(PuzzleId::Third);
    game.board.pieces.retain(|p| p.name != "blackKing");

    let MoveOutcome::Applied(first) = play(&mut game, "e2f3") else {
        panic!("scripted first move should be accepted");
    };
    assert!(first.opponent_move.is_none(), "No piece on a8 to reply with");
    assert_eq!(game.current_step, 1);
    assert!(game.board.white_to_move, "Skipped reply still passes the move back");
    assert_eq!(game.board.notation, "e2f3 ");

    assert!(play(&mut game, "e3f4").is_applied());
    assert!(play(&mut game, "c4c5").is_applied());
    assert!(game.is_solved());
}

#[test]
fn test_scripted_reply_is_logged_as_written() {
    let mut game = GameState::for_puzzle(PuzzleId::Third);
    game.board
        .pieces
        .push(Piece::new(99, "whitePawn1", PieceColor::White, PieceType::Pawn, sq("b8")));

    let MoveOutcome::Applied(first) = play(&mut game, "e2f3") else {
        panic!("scripted first move should be accepted");
    };
    let reply = first.opponent_move.expect("scripted reply");
    assert!(!reply.is_capture, "Replies keep their scripted capture flag");
    assert_eq!(game.board.notation, "e2f3 a8b8 ");

    assert_eq!(game.board.get_piece_at(sq("b8")).unwrap().name, "blackKing");
    assert!(game.board.pieces.iter().all(|p| p.id.0 != 99), "The pawn on b8 is removed");
}

#[test]
fn test_select_in_puzzle_offers_scripted_move() {
    let mut game = GameState::for_puzzle(PuzzleId::Third);

    assert_eq!(game.select(sq("e2")), vec![sq("f3")]);
    assert!(game.select(sq("c4")).is_empty(), "The king is not due to move yet");
    assert!(game.selected().is_some());

    assert!(play(&mut game, "e2f3").is_applied());
    assert_eq!(game.select(sq("e3")), vec![sq("f4")]);
}
