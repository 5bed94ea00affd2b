//! The game engine: admission, commit-reveal, settlement, history.

mod history;
mod round;

pub use history::{GameRecord, HistoryLog};
pub use round::{PlayerSlot, RoundState};

use crate::crypto::{MoveCommitment, Salt};
use crate::error::EngineError;
use crate::events::GameEvent;
use crate::game::{judge, GameOutcome, Move, PlayerId};
use crate::vault::StakeVault;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info};

/// Result of a join call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    JoinedAsPlayerOne,
    JoinedAsPlayerTwo,
    /// Both slots were occupied; the caller was not admitted and no stake
    /// was collected
    Ignored,
}

/// Result of a commit call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// The commitment was the zero sentinel and was not stored
    Ignored,
}

/// Result of a reveal call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The move was recorded (or re-confirmed); the round is still waiting
    /// on the opponent
    Recorded,
    /// The (move, salt) pair did not hash to the stored commitment; nothing
    /// changed
    Ignored,
    /// Both players revealed; the round settled on the beats-relation
    Resolved(GameOutcome),
    /// The reveal window elapsed without the opponent revealing; the caller
    /// was awarded the full pot
    Forfeited(GameOutcome),
}

/// Stake-backed Rock-Paper-Scissors engine
///
/// Holds exactly one round at a time plus an append-only history of
/// resolved rounds. All operations are synchronous and run to completion
/// atomically; explicit errors leave no partial writes, and settlement is
/// all-or-nothing (a failed payout rolls the whole resolution back).
pub struct GameEngine<V: StakeVault> {
    vault: V,
    round: RoundState,
    history: HistoryLog,
    events: Vec<GameEvent>,
    reveal_window: Duration,
    /// Simulated current time (for timeout testing)
    current_time: Option<DateTime<Utc>>,
    /// Set while settlement payouts run; mutating calls are rejected so a
    /// payout recipient cannot re-enter against a mid-reset round
    settling: bool,
}

impl<V: StakeVault> GameEngine<V> {
    /// Create an engine with the default one-hour reveal window
    pub fn new(vault: V) -> Self {
        Self::with_reveal_window(vault, Duration::hours(1))
    }

    /// Create an engine with an explicit reveal window
    pub fn with_reveal_window(vault: V, reveal_window: Duration) -> Self {
        Self {
            vault,
            round: RoundState::default(),
            history: HistoryLog::new(),
            events: Vec::new(),
            reveal_window,
            current_time: None,
            settling: false,
        }
    }

    /// Get current time (real or simulated)
    pub fn now(&self) -> DateTime<Utc> {
        self.current_time.unwrap_or_else(Utc::now)
    }

    /// Advance simulated time by seconds
    pub fn advance_time(&mut self, seconds: i64) {
        let current = self.current_time.unwrap_or_else(Utc::now);
        self.current_time = Some(current + Duration::seconds(seconds));
    }

    // Read accessors

    pub fn player_one(&self) -> Option<PlayerId> {
        self.round.player_one
    }

    pub fn player_two(&self) -> Option<PlayerId> {
        self.round.player_two
    }

    pub fn hashed_player_one_move(&self) -> Option<MoveCommitment> {
        self.round.hashed_move_one
    }

    pub fn hashed_player_two_move(&self) -> Option<MoveCommitment> {
        self.round.hashed_move_two
    }

    pub fn player_one_move(&self) -> Option<Move> {
        self.round.move_one
    }

    pub fn player_two_move(&self) -> Option<Move> {
        self.round.move_two
    }

    pub fn first_reveal(&self) -> Option<DateTime<Utc>> {
        self.round.first_reveal
    }

    /// Number of resolved rounds in the history log
    pub fn games_played(&self) -> usize {
        self.history.len()
    }

    /// Look up a resolved round by position in the history log
    pub fn historical_game(&self, index: usize) -> Result<GameRecord, EngineError> {
        self.history
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidIndex)
    }

    /// Drain buffered events for external subscribers
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn vault_mut(&mut self) -> &mut V {
        &mut self.vault
    }

    // State-mutating operations

    /// Join the round in progress with the given stake
    ///
    /// The first joiner fixes the initial bet; the second must match or
    /// exceed it. A third joiner is silently ignored and keeps their stake.
    pub fn join(&mut self, caller: PlayerId, stake: u64) -> Result<JoinOutcome, EngineError> {
        self.guard_settlement()?;

        if self.round.is_full() {
            debug!(player = %caller, "join ignored, round is full");
            return Ok(JoinOutcome::Ignored);
        }

        if self.round.player_one.is_none() {
            self.vault.collect(caller, stake)?;
            self.round.player_one = Some(caller);
            self.round.stake_one = stake;
            self.events.push(GameEvent::PlayerJoined { player: caller });
            info!(player = %caller, stake, "player one joined");
            Ok(JoinOutcome::JoinedAsPlayerOne)
        } else {
            // A rejoin by the current occupant is a no-op, not a second
            // slot: a player holding both slots could never commit for
            // slot two, stranding both stakes
            if self.round.player_one == Some(caller) {
                debug!(player = %caller, "join ignored, caller already joined");
                return Ok(JoinOutcome::Ignored);
            }
            if stake < self.round.initial_bet() {
                return Err(EngineError::InsufficientStake);
            }
            self.vault.collect(caller, stake)?;
            self.round.player_two = Some(caller);
            self.round.stake_two = stake;
            self.events.push(GameEvent::PlayerJoined { player: caller });
            info!(player = %caller, stake, "player two joined");
            Ok(JoinOutcome::JoinedAsPlayerTwo)
        }
    }

    /// Commit a hashed move for the round in progress
    ///
    /// Re-committing before the round resolves overwrites the previous
    /// hash; the commit count only reflects distinct players.
    pub fn commit_move(
        &mut self,
        caller: PlayerId,
        commitment: MoveCommitment,
    ) -> Result<CommitOutcome, EngineError> {
        self.guard_settlement()?;

        if !self.round.is_full() {
            return Err(EngineError::GameNotReady);
        }

        let slot = self
            .round
            .slot_of(caller)
            .ok_or(EngineError::NotAParticipant)?;

        if commitment.is_zero() {
            debug!(player = %caller, "commit ignored, zero commitment");
            return Ok(CommitOutcome::Ignored);
        }

        self.round.set_commitment(slot, commitment);
        self.events.push(GameEvent::PlayerMadeMove { player: caller });
        info!(player = %caller, %commitment, "player committed a move");
        Ok(CommitOutcome::Committed)
    }

    /// Reveal a previously committed move
    ///
    /// The (move, salt) pair must re-hash to the caller's stored
    /// commitment; a mismatch is silently ignored. The second valid reveal
    /// settles the round. A player who already revealed may call again
    /// after the reveal window to claim the pot from an unresponsive
    /// opponent.
    pub fn reveal_move(
        &mut self,
        caller: PlayerId,
        mv: Move,
        salt: &Salt,
    ) -> Result<RevealOutcome, EngineError> {
        self.guard_settlement()?;

        let slot = self
            .round
            .slot_of(caller)
            .ok_or(EngineError::NotAParticipant)?;

        if self.round.commit_count() < 2 {
            return Err(EngineError::StillCommitting);
        }

        let commitment = match self.round.commitment(slot) {
            Some(c) => c,
            None => return Err(EngineError::StillCommitting),
        };

        if !commitment.verify(mv, salt) {
            debug!(player = %caller, "reveal ignored, commitment mismatch");
            return Ok(RevealOutcome::Ignored);
        }

        self.round.set_revealed_move(slot, mv);

        if let Some(opponent_move) = self.round.revealed_move(slot.opponent()) {
            let (move_one, move_two) = match slot {
                PlayerSlot::One => (mv, opponent_move),
                PlayerSlot::Two => (opponent_move, mv),
            };
            let outcome = judge(move_one, move_two);
            self.settle(outcome)?;
            return Ok(RevealOutcome::Resolved(outcome));
        }

        match self.round.first_reveal {
            None => {
                self.round.first_reveal = Some(self.now());
                info!(player = %caller, "first reveal recorded");
                Ok(RevealOutcome::Recorded)
            }
            // The opponent has not revealed, so the earlier timestamp is
            // the caller's own: this is a re-confirmation of an already
            // revealed move.
            Some(first_reveal) => {
                let elapsed = self.now().signed_duration_since(first_reveal);
                if elapsed >= self.reveal_window {
                    let outcome = match slot {
                        PlayerSlot::One => GameOutcome::PlayerOneWon,
                        PlayerSlot::Two => GameOutcome::PlayerTwoWon,
                    };
                    info!(player = %caller, "reveal window elapsed, opponent forfeits");
                    self.settle(outcome)?;
                    Ok(RevealOutcome::Forfeited(outcome))
                } else {
                    Ok(RevealOutcome::Recorded)
                }
            }
        }
    }

    fn guard_settlement(&self) -> Result<(), EngineError> {
        if self.settling {
            return Err(EngineError::SettlementInProgress);
        }
        Ok(())
    }

    /// Settle the round: record the outcome, reset state, then pay out.
    ///
    /// Round state is reset and the history entry appended before any value
    /// transfer runs, so a payout recipient can never observe a half-reset
    /// round. If a transfer fails, everything (including already-applied
    /// transfers) is rolled back.
    fn settle(&mut self, outcome: GameOutcome) -> Result<(), EngineError> {
        let (player_one, player_two) = match (
            self.round.player(PlayerSlot::One),
            self.round.player(PlayerSlot::Two),
        ) {
            (Some(one), Some(two)) => (one, two),
            // Unreachable: settlement requires a fully committed round
            _ => return Err(EngineError::GameNotReady),
        };

        let payouts: [(PlayerId, u64); 2] = match outcome {
            GameOutcome::Draw => [
                (player_one, self.round.stake(PlayerSlot::One)),
                (player_two, self.round.stake(PlayerSlot::Two)),
            ],
            GameOutcome::PlayerOneWon => [(player_one, self.round.pot()), (player_two, 0)],
            GameOutcome::PlayerTwoWon => [(player_two, self.round.pot()), (player_one, 0)],
        };

        self.settling = true;
        let snapshot = self.round.clone();

        self.history.append(GameRecord {
            player_one,
            player_two,
            outcome,
        });
        self.events.push(GameEvent::GameOver {
            players: [player_one, player_two],
            outcome,
        });
        self.round = RoundState::default();

        let mut completed: Vec<(PlayerId, u64)> = Vec::new();
        for (to, amount) in payouts {
            if amount == 0 {
                continue;
            }
            if let Err(e) = self.vault.payout(to, amount) {
                error!(player = %to, amount, %e, "payout failed, rolling settlement back");
                for (paid, paid_amount) in completed {
                    if let Err(undo) = self.vault.collect(paid, paid_amount) {
                        error!(player = %paid, %undo, "failed to reclaim payout during rollback");
                    }
                }
                self.round = snapshot;
                self.history.pop_last();
                self.events.pop();
                self.settling = false;
                return Err(e.into());
            }
            completed.push((to, amount));
        }

        self.settling = false;
        info!(%outcome, games_played = self.history.len(), "round settled");
        Ok(())
    }
}
