//! Background AI search
//!
//! Each request runs on its own thread: the board snapshot is moved in by
//! value and exactly one response comes back over an mpsc channel.

use std::sync::mpsc::{channel, Receiver, RecvError, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::board::{Board, Pos, Stone};
use crate::config::AiConfig;
use crate::engine::AIEngine;

/// Work handed to the AI thread.
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest {
    pub snapshot: Board,
    pub color: Stone,
    pub depth: u8,
    /// Session generation the snapshot was taken from
    pub generation: u64,
}

/// The AI's answer, tagged with the generation of its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResponse {
    pub pos: Option<Pos>,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("AI worker exited without answering")]
    Disconnected,
}

/// Start searching on a new thread.
///
/// `config.depth` is ignored in favor of `request.depth`; the seed and the
/// think delay come from `config`.
pub fn spawn_search(request: MoveRequest, config: &AiConfig) -> PendingSearch {
    let (tx, rx) = channel();
    let delay = config.move_delay;
    let engine_config = AiConfig {
        depth: request.depth,
        ..config.clone()
    };

    thread::spawn(move || {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        let mut engine = AIEngine::with_config(&engine_config);
        let pos = engine.select_move(&request.snapshot, request.color);
        // The receiver is gone if the game was reset meanwhile
        let _ = tx.send(MoveResponse {
            pos,
            generation: request.generation,
        });
    });

    debug!(
        "dispatched AI search for {} (depth {}, generation {})",
        request.color.name(),
        request.depth,
        request.generation
    );

    PendingSearch::new(rx, request.generation)
}

/// Handle to an in-flight search. Dropping it abandons the answer.
#[derive(Debug)]
pub struct PendingSearch {
    receiver: Receiver<MoveResponse>,
    generation: u64,
    start_time: Instant,
}

impl PendingSearch {
    pub(crate) fn new(receiver: Receiver<MoveResponse>, generation: u64) -> Self {
        Self {
            receiver,
            generation,
            start_time: Instant::now(),
        }
    }

    /// Generation of the request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Non-blocking check; `Ok(None)` while the AI is still thinking.
    pub fn try_take(&self) -> Result<Option<MoveResponse>, WorkerError> {
        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Block until the AI answers.
    pub fn wait(&self) -> Result<MoveResponse, WorkerError> {
        self.receiver
            .recv()
            .map_err(|RecvError| WorkerError::Disconnected)
    }
}
