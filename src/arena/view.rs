use super::*;
use crate::GameId;
use crate::PlayerId;
use crate::RoundNumber;
use crate::Score;
use crate::rules::Choice;
use serde::Serialize;

/// Composite status the browser client drives its screens from.
/// Synthesized on demand from stored state, never stored itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Player1Turn,
    Player2Turn,
    Result,
    Completed,
}

/// One player slot as the client sees it. The recorded move stays hidden
/// until the round settles, so neither player can peek at the other's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub score: Score,
    pub choice: Option<Choice>,
}

/// Pure projection of one game and its current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub player1: PlayerView,
    pub player2: PlayerView,
    pub current_round: RoundNumber,
    pub status: Status,
}

impl GameView {
    pub fn project(game: &Game, round: &Round, player1: &Player, player2: &Player) -> Self {
        let status = match (game.active, round.phase()) {
            (false, _) => Status::Completed,
            (_, Phase::Completed) => Status::Result,
            (_, Phase::Empty) => Status::Player1Turn,
            (_, Phase::OneMoveRecorded) => match round.player1_choice {
                Some(_) => Status::Player2Turn,
                None => Status::Player1Turn,
            },
        };
        let reveal = round.completed;
        Self {
            id: game.id,
            player1: PlayerView {
                id: player1.id,
                name: player1.name.clone(),
                score: game.player1_score,
                choice: round.player1_choice.filter(|_| reveal),
            },
            player2: PlayerView {
                id: player2.id,
                name: player2.name.clone(),
                score: game.player2_score,
                choice: round.player2_choice.filter(|_| reveal),
            },
            current_round: game.current_round,
            status,
        }
    }
}
