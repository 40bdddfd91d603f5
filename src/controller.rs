//! Turn driver between the human, the session and the AI worker
//!
//! Presentation layers (GUI or console) own a [`GameController`] and only
//! talk to it: human clicks go in through [`GameController::request_human_move`],
//! the AI's reply comes back through [`GameController::poll_ai`] or
//! [`GameController::wait_for_ai`].

use std::time::Duration;

use log::{debug, error, warn};

use crate::board::Board;
use crate::config::AiConfig;
use crate::engine::AIEngine;
use crate::session::{GamePhase, GameSession, MoveEvent, Scores, AI, HUMAN};
use crate::worker::{spawn_search, MoveRequest, MoveResponse, PendingSearch, WorkerError};

/// AI computation state
#[derive(Debug)]
pub enum AiState {
    Idle,
    Thinking { pending: PendingSearch },
}

/// Game controller for one human (Black) against the AI (White).
#[derive(Debug)]
pub struct GameController {
    session: GameSession,
    config: AiConfig,
    ai_state: AiState,
    last_event: Option<MoveEvent>,
    last_ai_time: Option<Duration>,
    /// Neither the worker nor the inline fallback produced a move
    ai_failed: bool,
    message: Option<String>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl GameController {
    pub fn new(config: AiConfig) -> Self {
        Self::with_session(GameSession::new(), config)
    }

    /// Continue from an existing session. If it is the AI's turn the search
    /// starts right away.
    pub fn with_session(session: GameSession, config: AiConfig) -> Self {
        let mut controller = Self {
            session,
            config,
            ai_state: AiState::Idle,
            last_event: None,
            last_ai_time: None,
            ai_failed: false,
            message: None,
        };
        if !controller.session.is_game_over() && controller.session.current_player() == AI {
            controller.dispatch_ai();
        }
        controller
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Live board. Presentation must not show stone colors before
    /// [`is_revealed`](Self::is_revealed) is true.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Colors may be shown once the game has ended.
    pub fn is_revealed(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { pending } => Some(pending.elapsed()),
            AiState::Idle => None,
        }
    }

    /// How long the AI took for its last answer, think delay included
    pub fn last_ai_time(&self) -> Option<Duration> {
        self.last_ai_time
    }

    pub fn scores(&self) -> Scores {
        self.session.scores()
    }

    /// Most recent accepted move from either side
    pub fn last_event(&self) -> Option<&MoveEvent> {
        self.last_event.as_ref()
    }

    /// Problem worth showing to the player, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// One-line status for the presentation layer.
    pub fn status_text(&self) -> &'static str {
        match self.session.phase() {
            GamePhase::Terminal { winner: Some(winner) } if winner == HUMAN => "You win!",
            GamePhase::Terminal { winner: Some(_) } => "AI wins!",
            GamePhase::Terminal { winner: None } => "Draw!",
            GamePhase::InProgress { to_move } if to_move == HUMAN => "Your turn (Black)",
            GamePhase::InProgress { .. } if self.ai_failed => "AI failed, start a new game",
            GamePhase::InProgress { .. } => "AI is thinking...",
        }
    }

    /// Human clicks (row, col).
    ///
    /// Returns `None` and changes nothing if the AI is thinking, it is not
    /// the human's turn, the cell is off the board or taken, or the game is
    /// over. When the move leaves the game running, the AI is dispatched
    /// before returning.
    pub fn request_human_move(&mut self, row: usize, col: usize) -> Option<MoveEvent> {
        if self.is_ai_thinking() {
            debug!("ignoring ({row}, {col}): AI is thinking");
            return None;
        }

        let event = match self.session.apply_move(row, col, HUMAN) {
            Ok(event) => event,
            Err(err) => {
                debug!("rejected human move: {err}");
                return None;
            }
        };

        self.message = None;
        self.last_event = Some(event.clone());
        if !event.game_over {
            self.dispatch_ai();
        }
        Some(event)
    }

    /// Non-blocking: apply the AI's move if it has arrived.
    pub fn poll_ai(&mut self) -> Option<MoveEvent> {
        let (result, elapsed) = match &self.ai_state {
            AiState::Thinking { pending } => (pending.try_take(), pending.elapsed()),
            AiState::Idle => return None,
        };

        match result {
            Ok(None) => None,
            Ok(Some(response)) => {
                self.ai_state = AiState::Idle;
                self.last_ai_time = Some(elapsed);
                self.apply_ai_response(response)
            }
            Err(err) => {
                self.ai_state = AiState::Idle;
                self.worker_failed(err)
            }
        }
    }

    /// Blocking: wait for the AI and apply its move. `None` if no search is
    /// pending or its answer could not be applied.
    pub fn wait_for_ai(&mut self) -> Option<MoveEvent> {
        let pending = match std::mem::replace(&mut self.ai_state, AiState::Idle) {
            AiState::Thinking { pending } => pending,
            AiState::Idle => return None,
        };

        let result = pending.wait();
        self.last_ai_time = Some(pending.elapsed());
        match result {
            Ok(response) => self.apply_ai_response(response),
            Err(err) => self.worker_failed(err),
        }
    }

    /// Start over. Scores are kept; a search in flight is abandoned.
    pub fn new_game(&mut self) {
        if self.is_ai_thinking() {
            debug!("abandoning AI search of generation {}", self.session.generation());
        }
        self.ai_state = AiState::Idle;
        self.session.reset();
        self.last_event = None;
        self.last_ai_time = None;
        self.ai_failed = false;
        self.message = None;
    }

    fn dispatch_ai(&mut self) {
        let request = MoveRequest {
            snapshot: self.session.snapshot(),
            color: AI,
            depth: self.config.depth,
            generation: self.session.generation(),
        };
        let pending = spawn_search(request, &self.config);
        self.ai_state = AiState::Thinking { pending };
    }

    fn apply_ai_response(&mut self, response: MoveResponse) -> Option<MoveEvent> {
        if response.generation != self.session.generation() {
            warn!(
                "discarding AI move from generation {} (current {})",
                response.generation,
                self.session.generation()
            );
            return None;
        }
        if self.session.is_game_over() {
            warn!("discarding AI move: the game is already over");
            return None;
        }

        let Some(pos) = response.pos else {
            warn!("AI worker found no move on a live board");
            return self.play_ai_inline();
        };

        match self.session.apply_move(pos.row as usize, pos.col as usize, AI) {
            Ok(event) => {
                self.last_event = Some(event.clone());
                Some(event)
            }
            Err(err) => {
                error!("AI proposed an illegal move at ({}, {}): {err}", pos.row, pos.col);
                debug_assert!(false, "AI proposed an illegal move: {err}");
                self.play_ai_inline()
            }
        }
    }

    fn worker_failed(&mut self, err: WorkerError) -> Option<MoveEvent> {
        error!("{err}");
        self.play_ai_inline()
    }

    /// Search on the calling thread after the worker came back without a
    /// usable move. If that fails too the AI is stuck on move and only
    /// [`new_game`](Self::new_game) gets the player going again.
    fn play_ai_inline(&mut self) -> Option<MoveEvent> {
        if self.session.is_game_over() || self.session.current_player() != AI {
            return None;
        }
        warn!("searching for the AI move on the calling thread");

        let mut engine = AIEngine::with_config(&self.config);
        let played = engine
            .select_move(self.session.board(), AI)
            .map(|pos| self.session.apply_move(pos.row as usize, pos.col as usize, AI));

        match played {
            Some(Ok(event)) => {
                self.last_event = Some(event.clone());
                Some(event)
            }
            Some(Err(err)) => {
                error!("AI move rejected again: {err}");
                self.fail_ai()
            }
            None => {
                error!("AI has no move on a live board");
                self.fail_ai()
            }
        }
    }

    fn fail_ai(&mut self) -> Option<MoveEvent> {
        self.ai_failed = true;
        self.message = Some("AI error: start a new game".to_string());
        None
    }
}
