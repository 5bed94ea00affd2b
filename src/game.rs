//! Moves, outcomes, and player identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A Rock-Paper-Scissors move.
///
/// Discriminants match the wire encoding used for commitments; an
/// unrevealed move is represented as `Option<Move>::None` (encoded 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Move {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

impl Move {
    /// Single-byte encoding used when hashing a commitment
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }

    /// Decode from the wire encoding (1..=3)
    pub fn from_byte(byte: u8) -> Option<Move> {
        match byte {
            1 => Some(Move::Rock),
            2 => Some(Move::Paper),
            3 => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Check if this move beats the other
    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

/// Outcome of a resolved round.
///
/// Codes match the history encoding: Draw=0, PlayerOneWon=1, PlayerTwoWon=2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameOutcome {
    Draw = 0,
    PlayerOneWon = 1,
    PlayerTwoWon = 2,
}

impl GameOutcome {
    /// Numeric outcome code as stored in history records
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Draw => "draw",
            GameOutcome::PlayerOneWon => "player one won",
            GameOutcome::PlayerTwoWon => "player two won",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Determine the outcome from both players' revealed moves
pub fn judge(move_one: Move, move_two: Move) -> GameOutcome {
    if move_one == move_two {
        GameOutcome::Draw
    } else if move_one.beats(&move_two) {
        GameOutcome::PlayerOneWon
    } else {
        GameOutcome::PlayerTwoWon
    }
}

/// Player identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Create a new random player ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(judge(Move::Rock, Move::Scissors), GameOutcome::PlayerOneWon);
        assert_eq!(judge(Move::Scissors, Move::Rock), GameOutcome::PlayerTwoWon);
    }

    #[test]
    fn test_scissors_beats_paper() {
        assert_eq!(
            judge(Move::Scissors, Move::Paper),
            GameOutcome::PlayerOneWon
        );
        assert_eq!(
            judge(Move::Paper, Move::Scissors),
            GameOutcome::PlayerTwoWon
        );
    }

    #[test]
    fn test_paper_beats_rock() {
        assert_eq!(judge(Move::Paper, Move::Rock), GameOutcome::PlayerOneWon);
        assert_eq!(judge(Move::Rock, Move::Paper), GameOutcome::PlayerTwoWon);
    }

    #[test]
    fn test_draws() {
        assert_eq!(judge(Move::Rock, Move::Rock), GameOutcome::Draw);
        assert_eq!(judge(Move::Paper, Move::Paper), GameOutcome::Draw);
        assert_eq!(judge(Move::Scissors, Move::Scissors), GameOutcome::Draw);
    }

    #[test]
    fn test_all_outcomes() {
        // All 9 combinations
        let moves = [Move::Rock, Move::Paper, Move::Scissors];
        let mut one_wins = 0;
        let mut two_wins = 0;
        let mut draws = 0;

        for a in &moves {
            for b in &moves {
                match judge(*a, *b) {
                    GameOutcome::PlayerOneWon => one_wins += 1,
                    GameOutcome::PlayerTwoWon => two_wins += 1,
                    GameOutcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(one_wins, 3);
        assert_eq!(two_wins, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_move_byte_encoding() {
        assert_eq!(Move::Rock.as_byte(), 1);
        assert_eq!(Move::Paper.as_byte(), 2);
        assert_eq!(Move::Scissors.as_byte(), 3);

        assert_eq!(Move::from_byte(2), Some(Move::Paper));
        assert_eq!(Move::from_byte(0), None);
        assert_eq!(Move::from_byte(4), None);
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(GameOutcome::Draw.code(), 0);
        assert_eq!(GameOutcome::PlayerOneWon.code(), 1);
        assert_eq!(GameOutcome::PlayerTwoWon.code(), 2);
    }

    #[test]
    fn test_player_id_generation() {
        let id1 = PlayerId::new();
        let id2 = PlayerId::new();
        assert_ne!(id1, id2);
    }
}
