use crate::GameId;
use crate::PlayerId;
use crate::RoundNumber;

/// Everything that can go wrong at the store boundary.
///
/// `Pending` is not a true error: the round exists but has not resolved
/// yet, and callers are expected to poll until it does. `Internal` marks
/// a broken store invariant and is surfaced loudly, never swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// Malformed input: bad name length or an out-of-domain value.
    #[error("invalid request: {0}")]
    Invalid(String),
    /// Unknown game id.
    #[error("game {0} not found")]
    GameNotFound(GameId),
    /// Unknown round for an existing game.
    #[error("round {1} not found for game {0}")]
    RoundNotFound(GameId, RoundNumber),
    /// Submitting player is not seated at the game.
    #[error("player {0} is not part of game {1}")]
    Forbidden(PlayerId, GameId),
    /// Round exists but has no result yet. Poll again.
    #[error("Round result not available yet")]
    Pending,
    /// Mutation against a settled round, or advancing past one still in play.
    #[error("{0}")]
    Conflict(String),
    /// Store invariant violation.
    #[error("internal inconsistency: {0}")]
    Internal(String),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
