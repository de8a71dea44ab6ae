//! Error types for the round core.

use tui_memory_types::RoundStatus;

/// Result alias that carries [`MemoryError`].
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Errors raised by the round core.
///
/// `InvalidInput` is a configuration problem and should be caught once at
/// startup. `IllegalTransition` never reaches the player: controller
/// operations log it and turn into no-ops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MemoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("illegal transition: `{op}` while {status}")]
    IllegalTransition {
        op: &'static str,
        status: RoundStatus,
    },
}

impl MemoryError {
    pub fn invalid<T: Into<String>>(msg: T) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn illegal(op: &'static str, status: RoundStatus) -> Self {
        Self::IllegalTransition { op, status }
    }
}
