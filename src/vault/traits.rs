//! Stake vault trait definition.

use crate::game::PlayerId;
use thiserror::Error;

/// Errors from vault operations
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("unknown account: {0}")]
    UnknownAccount(PlayerId),

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("transfer failed: {0}")]
    TransferFailed(String),
}

/// Trait for stake custody operations
///
/// This trait abstracts the value transfer primitive the engine settles
/// through. Implementations can be:
/// - InMemoryVault for testing
/// - A real ledger or payment channel client for production
///
/// Every operation is synchronous and atomic: it either fully applies or
/// returns an error having changed nothing, so the engine can treat
/// settlement as all-or-nothing.
pub trait StakeVault {
    /// Move a stake from a player's balance into engine custody
    fn collect(&mut self, from: PlayerId, amount: u64) -> Result<(), VaultError>;

    /// Pay out from engine custody to a player
    fn payout(&mut self, to: PlayerId, amount: u64) -> Result<(), VaultError>;

    /// Balance currently held in engine custody
    fn held(&self) -> u64;
}
