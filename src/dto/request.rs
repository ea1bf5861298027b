use crate::PlayerId;
use crate::RoundNumber;
use crate::rules::Choice;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/games`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    pub player1_name: String,
    pub player2_name: String,
}

/// Body of `POST /api/games/{id}/choices`. An out-of-domain choice fails
/// deserialization and never reaches the store.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitChoice {
    pub player_id: PlayerId,
    pub choice: Choice,
    pub round_number: RoundNumber,
}
