//! Stake custody abstraction.

mod memory;
mod traits;

pub use memory::InMemoryVault;
pub use traits::{StakeVault, VaultError};
