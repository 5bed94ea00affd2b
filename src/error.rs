//! Engine error taxonomy.

use crate::vault::VaultError;
use thiserror::Error;

/// Errors from engine operations
///
/// Every variant aborts the triggering operation entirely with no partial
/// writes. Silent rejections (joining a full game, a reveal that does not
/// match the stored commitment) are not errors; they surface as `Ignored`
/// operation outcomes instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("your bet amount needs to be greater than or equal to the initial bet")]
    InsufficientStake,

    #[error("game needs more players to join first")]
    GameNotReady,

    #[error("you did not join the game as a player")]
    NotAParticipant,

    #[error("the game is still running")]
    StillCommitting,

    #[error("please enter a valid index")]
    InvalidIndex,

    #[error("settlement is in progress")]
    SettlementInProgress,

    #[error(transparent)]
    Vault(#[from] VaultError),
}
