//! AI configuration
//!
//! Built from command line arguments in `main`, or from `Default` in tests.

use std::time::Duration;

use thiserror::Error;

/// Search depth used by the reference game
pub const DEFAULT_DEPTH: u8 = 2;
/// Deepest search accepted; beyond this a move takes too long on 15x15
pub const MAX_DEPTH: u8 = 4;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("search depth {0} is out of range (1-4)")]
    DepthOutOfRange(u8),
}

/// Settings for the computer opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// Minimax depth in plies
    pub depth: u8,
    /// Seed for the random fallback moves; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Pause before the AI starts searching
    pub move_delay: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            move_delay: Duration::ZERO,
        }
    }
}

impl AiConfig {
    /// Check the configuration before handing it to the AI
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }
}
