//! Observable engine events.

use crate::game::{GameOutcome, PlayerId};
use serde::{Deserialize, Serialize};

/// Event emitted by the engine for external subscribers
///
/// Events are buffered on the engine and drained with
/// [`GameEngine::take_events`](crate::engine::GameEngine::take_events).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerJoined {
        player: PlayerId,
    },
    PlayerMadeMove {
        player: PlayerId,
    },
    GameOver {
        players: [PlayerId; 2],
        outcome: GameOutcome,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::GameOver {
            players: [PlayerId::new(), PlayerId::new()],
            outcome: GameOutcome::PlayerTwoWon,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
