//! Append-only log of resolved rounds.

use crate::game::{GameOutcome, PlayerId};
use serde::{Deserialize, Serialize};

/// Immutable record of one resolved (or forced) round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player_one: PlayerId,
    pub player_two: PlayerId,
    pub outcome: GameOutcome,
}

/// Append-only history of resolved rounds
///
/// Grows monotonically; entries are never mutated or pruned. The only
/// exception is [`pop_last`](HistoryLog::pop_last), used to roll back a
/// settlement whose value transfer failed.
#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    records: Vec<GameRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn pop_last(&mut self) -> Option<GameRecord> {
        self.records.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: GameOutcome) -> GameRecord {
        GameRecord {
            player_one: PlayerId::new(),
            player_two: PlayerId::new(),
            outcome,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = HistoryLog::new();
        let first = record(GameOutcome::Draw);
        let second = record(GameOutcome::PlayerTwoWon);

        log.append(first);
        log.append(second);

        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0), Some(&first));
        assert_eq!(log.get(1), Some(&second));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let mut log = HistoryLog::new();
        assert_eq!(log.get(0), None);

        log.append(record(GameOutcome::PlayerOneWon));
        assert_eq!(log.get(1), None);
    }
}
