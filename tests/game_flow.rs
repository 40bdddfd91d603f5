//! End-to-end games through the controller and the AI worker thread.

use std::thread;
use std::time::{Duration, Instant};

use omok::worker::spawn_search;
use omok::{AiConfig, Board, GameController, GameSession, MoveRequest, Pos, Stone};
use pretty_assertions::assert_eq;

fn controller() -> GameController {
    GameController::new(AiConfig::default().with_seed(11))
}

#[test]
fn human_move_gets_ai_reply_nearby() {
    let mut controller = controller();
    let event = controller.request_human_move(7, 7).expect("legal move");
    assert_eq!(event.player, Stone::Black);
    assert!(event.reveal.is_none());

    let reply = controller.wait_for_ai().expect("AI reply");
    assert_eq!(reply.player, Stone::White);
    assert!(reply.pos.chebyshev(Pos::new(7, 7)) <= 2);
    assert!(reply.reveal.is_none());
    assert_eq!(controller.status_text(), "Your turn (Black)");
}

#[test]
fn poll_eventually_applies_ai_move() {
    let config = AiConfig::default()
        .with_seed(5)
        .with_move_delay(Duration::from_millis(10));
    let mut controller = GameController::new(config);
    controller.request_human_move(7, 7).expect("legal move");

    let deadline = Instant::now() + Duration::from_secs(10);
    let reply = loop {
        if let Some(reply) = controller.poll_ai() {
            break reply;
        }
        assert!(Instant::now() < deadline, "AI never answered");
        assert!(controller.is_ai_thinking());
        thread::sleep(Duration::from_millis(5));
    };

    assert_eq!(reply.player, Stone::White);
    assert!(!controller.is_ai_thinking());
}

#[test]
fn clicks_ignored_while_ai_thinks() {
    let config = AiConfig::default().with_move_delay(Duration::from_millis(50));
    let mut controller = GameController::new(config);
    controller.request_human_move(7, 7).expect("legal move");

    assert!(controller.request_human_move(0, 0).is_none());
    assert!(controller.board().is_empty(Pos::new(0, 0)));

    controller.wait_for_ai().expect("AI reply");
    assert!(controller.request_human_move(0, 0).is_some());
}

#[test]
fn worker_blocks_open_four() {
    let mut board = Board::new();
    for col in 5..9 {
        board.place_stone(Pos::new(5, col), Stone::Black);
    }
    board.place_stone(Pos::new(6, 6), Stone::White);
    board.place_stone(Pos::new(4, 7), Stone::White);

    let request = MoveRequest {
        snapshot: board,
        color: Stone::White,
        depth: 2,
        generation: 0,
    };
    let response = spawn_search(request, &AiConfig::default()).wait().expect("AI reply");
    let pos = response.pos.expect("a move");
    assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9), "AI did not block: {pos:?}");
}

#[test]
fn stale_reply_after_new_game_is_dropped() {
    let config = AiConfig::default().with_move_delay(Duration::from_millis(30));
    let mut controller = GameController::new(config);
    controller.request_human_move(7, 7).expect("legal move");
    controller.new_game();

    // Give the abandoned worker time to finish
    thread::sleep(Duration::from_millis(100));
    assert!(controller.poll_ai().is_none());
    assert!(controller.wait_for_ai().is_none());
    assert!(controller.board().is_board_empty());
    assert_eq!(controller.session().generation(), 1);
    assert_eq!(controller.status_text(), "Your turn (Black)");
}

/// Session where Black holds (0,0)..(0,3) and wins at (0,4); White's stones
/// on row 10 are spread out. Black to move.
fn black_about_to_win() -> GameSession {
    let mut session = GameSession::new();
    for col in 0..4 {
        session.apply_move(0, col, Stone::Black).expect("setup move");
        session.apply_move(10, col * 2, Stone::White).expect("setup move");
    }
    session
}

/// Session where White holds (14,0)..(14,3) and Black's stones are spread
/// out on row 0. Black to move; any move but (14,4) lets White win.
fn white_about_to_win() -> GameSession {
    let mut session = GameSession::new();
    for col in 0..4 {
        session.apply_move(0, col * 3, Stone::Black).expect("setup move");
        session.apply_move(14, col, Stone::White).expect("setup move");
    }
    session
}

#[test]
fn reveal_only_on_terminal_event() {
    let mut controller = GameController::with_session(black_about_to_win(), AiConfig::default());
    assert!(!controller.is_revealed());

    let event = controller.request_human_move(0, 4).expect("legal move");
    assert!(event.game_over);
    assert_eq!(event.winner, Some(Stone::Black));
    assert_eq!(event.reveal, Some(*controller.board()));
    assert!(controller.is_revealed());
    assert_eq!(controller.status_text(), "You win!");
    assert!(!controller.is_ai_thinking());

    // A fresh game hides everything again
    controller.new_game();
    let event = controller.request_human_move(7, 7).expect("legal move");
    assert_eq!(event.reveal, None);
    let reply = controller.wait_for_ai().expect("AI reply");
    assert_eq!(reply.reveal, None);
}

#[test]
fn ai_win_reveals_board() {
    let mut controller = GameController::with_session(white_about_to_win(), AiConfig::default().with_seed(11));
    let event = controller.request_human_move(7, 7).expect("legal move");
    assert_eq!(event.reveal, None);

    let reply = controller.wait_for_ai().expect("AI reply");
    assert_eq!(reply.pos, Pos::new(14, 4));
    assert_eq!(reply.winner, Some(Stone::White));
    assert_eq!(reply.reveal, Some(*controller.board()));
    assert_eq!(controller.status_text(), "AI wins!");
}

#[test]
fn replay_reproduces_board_and_outcome() {
    let mut controller = controller();
    for (row, col) in [(7, 7), (8, 8), (6, 6), (9, 9)] {
        if controller.request_human_move(row, col).is_some() {
            controller.wait_for_ai();
        }
    }
    let original = controller.session().clone();

    let mut replay = GameSession::new();
    for mv in original.history() {
        replay
            .apply_move(mv.pos.row as usize, mv.pos.col as usize, mv.player)
            .expect("replayed move is legal");
    }

    assert_eq!(*replay.board(), *original.board());
    assert_eq!(replay.phase(), original.phase());
    assert_eq!(replay.history(), original.history());
}

#[test]
fn scores_survive_new_game() {
    let mut controller = GameController::with_session(black_about_to_win(), AiConfig::default());
    controller.request_human_move(0, 4).expect("winning move");
    assert_eq!(controller.scores().black, 1);

    controller.new_game();
    assert_eq!(controller.scores().black, 1);
    assert_eq!(controller.scores().white, 0);
    assert!(controller.board().is_board_empty());

    // Scores keep accumulating across games of the same session
    controller.request_human_move(7, 7).expect("legal move");
    controller.wait_for_ai().expect("AI reply");
    controller.new_game();
    assert_eq!(controller.scores().black, 1);
}
