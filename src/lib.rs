//! Rock-Paper-Scissors Engine Library
//!
//! This crate provides a stake-backed, two-player Rock-Paper-Scissors game
//! built on a commit-reveal protocol:
//! - Salt and MoveCommitment for the commit-reveal scheme
//! - StakeVault trait and InMemoryVault for stake custody
//! - GameEngine holding one round at a time plus an append-only history log

pub mod crypto;
pub mod engine;
pub mod error;
pub mod events;
pub mod game;
pub mod vault;

pub use crypto::{MoveCommitment, Salt};
pub use engine::{CommitOutcome, GameEngine, GameRecord, JoinOutcome, RevealOutcome};
pub use error::EngineError;
pub use events::GameEvent;
pub use game::{judge, GameOutcome, Move, PlayerId};
pub use vault::{InMemoryVault, StakeVault, VaultError};
