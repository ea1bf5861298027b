use super::Seat;
use crate::GameId;
use crate::RoundNumber;
use crate::rules::Choice;
use crate::rules::Verdict;
use crate::rules::Winner;

/// Lifecycle of a round, derived from its recorded moves. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    OneMoveRecorded,
    Completed,
}

/// One exchange of simultaneous moves within a game, keyed by
/// (game id, round number).
///
/// Winner, message and the completed flag are set together, exactly once,
/// the instant the second move lands; they are never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub game_id: GameId,
    pub number: RoundNumber,
    pub player1_choice: Option<Choice>,
    pub player2_choice: Option<Choice>,
    pub winner: Option<Winner>,
    pub message: Option<&'static str>,
    pub completed: bool,
}

/// Both moves plus the verdict of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub player1_choice: Choice,
    pub player2_choice: Choice,
    pub winner: Winner,
    pub message: &'static str,
}

impl Round {
    pub fn new(game_id: GameId, number: RoundNumber) -> Self {
        Self {
            game_id,
            number,
            player1_choice: None,
            player2_choice: None,
            winner: None,
            message: None,
            completed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.player1_choice, self.player2_choice, self.completed) {
            (_, _, true) => Phase::Completed,
            (None, None, false) => Phase::Empty,
            _ => Phase::OneMoveRecorded,
        }
    }

    /// Records a move in the given slot, overwriting any prior submission.
    pub fn record(&mut self, seat: Seat, choice: Choice) {
        match seat {
            Seat::One => self.player1_choice = Some(choice),
            Seat::Two => self.player2_choice = Some(choice),
        }
    }

    /// Resolves the round once both slots hold a move.
    /// Returns the verdict exactly once; later calls are no-ops.
    pub fn settle(&mut self) -> Option<Verdict> {
        match (self.completed, self.player1_choice, self.player2_choice) {
            (false, Some(p1), Some(p2)) => {
                let verdict = Verdict::resolve(p1, p2);
                self.winner = Some(verdict.winner);
                self.message = Some(verdict.message);
                self.completed = true;
                Some(verdict)
            }
            _ => None,
        }
    }

    /// Snapshot of a settled round. None until completed.
    pub fn outcome(&self) -> Option<Outcome> {
        match (
            self.completed,
            self.player1_choice,
            self.player2_choice,
            self.winner,
            self.message,
        ) {
            (true, Some(player1_choice), Some(player2_choice), Some(winner), Some(message)) => {
                Some(Outcome {
                    player1_choice,
                    player2_choice,
                    winner,
                    message,
                })
            }
            _ => None,
        }
    }
}
