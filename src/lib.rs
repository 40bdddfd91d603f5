//! Blind Omok: five-in-a-row against a minimax AI, with every stone hidden
//! until the game ends
//!
//! - Standard 15x15 board
//! - Black (human) moves first, White is the computer
//! - A run of five or more in any direction wins
//! - Stone colors are disclosed only on the move that ends the game
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Five-in-a-row detection
//! - [`session`]: One game table: moves, turn order, winner, scores
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Layered move policy built on the search
//! - [`worker`]: Runs the engine on a background thread
//! - [`controller`]: Turn driver used by the front ends
//! - [`ui`] and [`console`]: GUI and terminal front ends
//!
//! # Quick Start
//!
//! ```
//! use omok::{AiConfig, GameController};
//!
//! let mut controller = GameController::new(AiConfig::default().with_seed(1));
//! let event = controller.request_human_move(7, 7).expect("legal move");
//! assert!(event.reveal.is_none());
//!
//! // The AI answers on its own thread
//! let reply = controller.wait_for_ai().expect("AI reply");
//! println!("AI played at ({}, {})", reply.pos.row, reply.pos.col);
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Alpha-beta search over cells near existing stones
//! 4. Random nearby cell
//! 5. Center on an empty board

pub mod board;
pub mod config;
pub mod console;
pub mod controller;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;
pub mod worker;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{AiConfig, ConfigError};
pub use controller::GameController;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use session::{GamePhase, GameSession, MoveError, MoveEvent, Scores};
pub use worker::{MoveRequest, MoveResponse, WorkerError};
