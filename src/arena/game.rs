use crate::GameId;
use crate::PlayerId;
use crate::RoundNumber;
use crate::Score;
use crate::rules::Winner;

/// Slot designation within a game. Fixed for the game's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    One,
    Two,
}

/// A persistent pairing of two players across a sequence of rounds.
///
/// Scores are mutated only by round resolution; the round counter only by
/// round advancement. There is no player substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub player1_score: Score,
    pub player2_score: Score,
    pub current_round: RoundNumber,
    pub active: bool,
}

impl Game {
    pub fn new(id: GameId, player1_id: PlayerId, player2_id: PlayerId) -> Self {
        Self {
            id,
            player1_id,
            player2_id,
            player1_score: 0,
            player2_score: 0,
            current_round: 1,
            active: true,
        }
    }

    /// Which slot a player occupies, if any.
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        if player == self.player1_id {
            Some(Seat::One)
        } else if player == self.player2_id {
            Some(Seat::Two)
        } else {
            None
        }
    }

    /// Credits the winning slot. Draws leave both scores untouched.
    pub fn award(&mut self, winner: Winner) {
        match winner {
            Winner::PlayerOne => self.player1_score += 1,
            Winner::PlayerTwo => self.player2_score += 1,
            Winner::Draw => {}
        }
    }
}
