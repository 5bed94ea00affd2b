//! In-memory vault for testing.

use super::traits::{StakeVault, VaultError};
use crate::game::PlayerId;
use std::collections::HashMap;

/// In-memory stake vault for testing
///
/// Tracks a free balance per player plus the pot held in engine custody.
#[derive(Clone, Debug, Default)]
pub struct InMemoryVault {
    balances: HashMap<PlayerId, u64>,
    held: u64,
}

impl InMemoryVault {
    /// Create a new empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a player's free balance
    pub fn credit(&mut self, player: PlayerId, amount: u64) {
        *self.balances.entry(player).or_insert(0) += amount;
    }

    /// Get a player's free balance
    pub fn balance(&self, player: PlayerId) -> u64 {
        self.balances.get(&player).copied().unwrap_or(0)
    }
}

impl StakeVault for InMemoryVault {
    fn collect(&mut self, from: PlayerId, amount: u64) -> Result<(), VaultError> {
        let balance = self
            .balances
            .get_mut(&from)
            .ok_or(VaultError::UnknownAccount(from))?;

        if *balance < amount {
            return Err(VaultError::InsufficientFunds);
        }

        *balance -= amount;
        self.held += amount;
        Ok(())
    }

    fn payout(&mut self, to: PlayerId, amount: u64) -> Result<(), VaultError> {
        if self.held < amount {
            return Err(VaultError::InsufficientFunds);
        }

        self.held -= amount;
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }

    fn held(&self) -> u64 {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_and_payout() {
        let mut vault = InMemoryVault::new();
        let player = PlayerId::new();
        vault.credit(player, 1000);

        vault.collect(player, 400).unwrap();
        assert_eq!(vault.balance(player), 600);
        assert_eq!(vault.held(), 400);

        vault.payout(player, 400).unwrap();
        assert_eq!(vault.balance(player), 1000);
        assert_eq!(vault.held(), 0);
    }

    #[test]
    fn test_collect_insufficient_funds() {
        let mut vault = InMemoryVault::new();
        let player = PlayerId::new();
        vault.credit(player, 100);

        let result = vault.collect(player, 500);
        assert!(matches!(result, Err(VaultError::InsufficientFunds)));

        // Nothing moved
        assert_eq!(vault.balance(player), 100);
        assert_eq!(vault.held(), 0);
    }

    #[test]
    fn test_collect_unknown_account() {
        let mut vault = InMemoryVault::new();
        let stranger = PlayerId::new();

        let result = vault.collect(stranger, 1);
        assert!(matches!(result, Err(VaultError::UnknownAccount(p)) if p == stranger));
    }

    #[test]
    fn test_payout_exceeding_held_fails() {
        let mut vault = InMemoryVault::new();
        let player = PlayerId::new();
        vault.credit(player, 100);
        vault.collect(player, 100).unwrap();

        let result = vault.payout(player, 200);
        assert!(matches!(result, Err(VaultError::InsufficientFunds)));
        assert_eq!(vault.held(), 100);
    }

    #[test]
    fn test_payout_to_fresh_account() {
        let mut vault = InMemoryVault::new();
        let funder = PlayerId::new();
        let winner = PlayerId::new();
        vault.credit(funder, 100);
        vault.collect(funder, 100).unwrap();

        vault.payout(winner, 100).unwrap();
        assert_eq!(vault.balance(winner), 100);
    }
}
