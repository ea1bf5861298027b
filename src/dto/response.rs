use crate::GameId;
use crate::PlayerId;
use crate::RoundNumber;
use crate::Score;
use crate::arena::Game;
use crate::arena::Outcome;
use crate::rules::Choice;
use crate::rules::Winner;
use serde::Serialize;

/// Full game record, as returned by create and fetch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGame {
    pub id: GameId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub player1_score: Score,
    pub player2_score: Score,
    pub current_round: RoundNumber,
    pub active: bool,
}

impl From<Game> for ApiGame {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            player1_id: game.player1_id,
            player2_id: game.player2_id,
            player1_score: game.player1_score,
            player2_score: game.player2_score,
            current_round: game.current_round,
            active: game.active,
        }
    }
}

/// Acknowledgement for a submitted choice.
/// Never echoes the opponent's move.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChoiceAck {
    pub game_id: GameId,
    pub round_number: RoundNumber,
    pub player_id: PlayerId,
    pub submitted: bool,
    pub round_complete: bool,
}

/// A settled round: both moves, the verdict, and up-to-date scores.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoundResult {
    pub game_id: GameId,
    pub round_number: RoundNumber,
    pub player1_choice: Choice,
    pub player2_choice: Choice,
    pub winner: Winner,
    pub message: &'static str,
    pub player1_score: Score,
    pub player2_score: Score,
}

impl From<(RoundNumber, Outcome, Game)> for ApiRoundResult {
    fn from((round_number, outcome, game): (RoundNumber, Outcome, Game)) -> Self {
        Self {
            game_id: game.id,
            round_number,
            player1_choice: outcome.player1_choice,
            player2_choice: outcome.player2_choice,
            winner: outcome.winner,
            message: outcome.message,
            player1_score: game.player1_score,
            player2_score: game.player2_score,
        }
    }
}

/// Confirmation that the game moved on to a fresh round.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNextRound {
    pub game_id: GameId,
    pub current_round: RoundNumber,
}
