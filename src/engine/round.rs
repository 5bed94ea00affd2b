//! Mutable state of the round in progress.

use crate::crypto::MoveCommitment;
use crate::game::{Move, PlayerId};
use chrono::{DateTime, Utc};

/// Which of the two player slots a participant occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Get the opponent's slot
    pub fn opponent(&self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// State of the single round the engine holds at a time
///
/// `Default` is the reset/empty value: both slots unoccupied, no
/// commitments, no revealed moves, no first-reveal timestamp. Resolution
/// returns the round to exactly this value.
#[derive(Clone, Debug, Default)]
pub struct RoundState {
    pub(crate) player_one: Option<PlayerId>,
    pub(crate) player_two: Option<PlayerId>,
    pub(crate) stake_one: u64,
    pub(crate) stake_two: u64,
    pub(crate) hashed_move_one: Option<MoveCommitment>,
    pub(crate) hashed_move_two: Option<MoveCommitment>,
    pub(crate) move_one: Option<Move>,
    pub(crate) move_two: Option<Move>,
    pub(crate) first_reveal: Option<DateTime<Utc>>,
}

impl RoundState {
    /// Stake fixed by the first joiner; the second joiner must match or exceed it
    pub fn initial_bet(&self) -> u64 {
        self.stake_one
    }

    /// Both player slots occupied?
    pub fn is_full(&self) -> bool {
        self.player_one.is_some() && self.player_two.is_some()
    }

    /// Number of players who have committed a hashed move (0, 1, 2)
    pub fn commit_count(&self) -> u8 {
        self.hashed_move_one.is_some() as u8 + self.hashed_move_two.is_some() as u8
    }

    /// Total stake held for this round
    pub fn pot(&self) -> u64 {
        self.stake_one + self.stake_two
    }

    /// The slot a caller occupies, if they joined this round
    pub fn slot_of(&self, caller: PlayerId) -> Option<PlayerSlot> {
        if self.player_one == Some(caller) {
            Some(PlayerSlot::One)
        } else if self.player_two == Some(caller) {
            Some(PlayerSlot::Two)
        } else {
            None
        }
    }

    pub fn player(&self, slot: PlayerSlot) -> Option<PlayerId> {
        match slot {
            PlayerSlot::One => self.player_one,
            PlayerSlot::Two => self.player_two,
        }
    }

    pub fn stake(&self, slot: PlayerSlot) -> u64 {
        match slot {
            PlayerSlot::One => self.stake_one,
            PlayerSlot::Two => self.stake_two,
        }
    }

    pub fn commitment(&self, slot: PlayerSlot) -> Option<MoveCommitment> {
        match slot {
            PlayerSlot::One => self.hashed_move_one,
            PlayerSlot::Two => self.hashed_move_two,
        }
    }

    pub(crate) fn set_commitment(&mut self, slot: PlayerSlot, commitment: MoveCommitment) {
        match slot {
            PlayerSlot::One => self.hashed_move_one = Some(commitment),
            PlayerSlot::Two => self.hashed_move_two = Some(commitment),
        }
    }

    pub fn revealed_move(&self, slot: PlayerSlot) -> Option<Move> {
        match slot {
            PlayerSlot::One => self.move_one,
            PlayerSlot::Two => self.move_two,
        }
    }

    pub(crate) fn set_revealed_move(&mut self, slot: PlayerSlot, mv: Move) {
        match slot {
            PlayerSlot::One => self.move_one = Some(mv),
            PlayerSlot::Two => self.move_two = Some(mv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_is_empty() {
        let round = RoundState::default();
        assert_eq!(round.player_one, None);
        assert_eq!(round.player_two, None);
        assert_eq!(round.initial_bet(), 0);
        assert_eq!(round.commit_count(), 0);
        assert!(!round.is_full());
        assert_eq!(round.first_reveal, None);
    }

    #[test]
    fn test_slot_of() {
        let p1 = PlayerId::new();
        let p2 = PlayerId::new();
        let round = RoundState {
            player_one: Some(p1),
            player_two: Some(p2),
            ..Default::default()
        };

        assert_eq!(round.slot_of(p1), Some(PlayerSlot::One));
        assert_eq!(round.slot_of(p2), Some(PlayerSlot::Two));
        assert_eq!(round.slot_of(PlayerId::new()), None);
    }

    #[test]
    fn test_slot_opponent() {
        assert_eq!(PlayerSlot::One.opponent(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::Two.opponent(), PlayerSlot::One);
    }
}
