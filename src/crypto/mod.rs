//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - Salt supplied by a player at commit time
//! - MoveCommitment binding a move to that salt

mod commitment;

pub use commitment::{MoveCommitment, Salt};
