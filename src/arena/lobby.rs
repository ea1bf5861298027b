use super::*;
use crate::GameId;
use crate::PlayerId;
use crate::RoundNumber;
use crate::rules::Choice;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// Longest accepted player name.
const NAME_LIMIT: usize = 30;

/// A game record together with the rounds it owns.
#[derive(Debug)]
struct Table {
    game: Game,
    rounds: HashMap<RoundNumber, Round>,
}

/// Manages active games and their lifecycles.
///
/// Single authority for scores and round advancement, for the lifetime of
/// the process. Every read-modify-write against one game goes through that
/// game's own mutex, so both players submitting at once cannot race the
/// "both moves present, resolve" transition. Identity allocation has its
/// own lock.
pub struct Lobby {
    tables: RwLock<HashMap<GameId, Arc<Mutex<Table>>>>,
    roster: RwLock<Roster>,
    count: AtomicU64,
}

impl Default for Lobby {
    fn default() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            roster: RwLock::new(Roster::default()),
            count: AtomicU64::new(1),
        }
    }
}

impl Lobby {
    /// Opens a new game between two named players, with round 1 ready for
    /// moves. Names seen before resolve to their existing identity.
    pub async fn create_game(&self, name1: &str, name2: &str) -> ArenaResult<Game> {
        Self::screen(name1)?;
        Self::screen(name2)?;
        let (player1, player2) = {
            let mut roster = self.roster.write().await;
            (roster.enroll(name1), roster.enroll(name2))
        };
        let id = self.count.fetch_add(1, Ordering::Relaxed);
        let game = Game::new(id, player1, player2);
        let rounds = HashMap::from([(1, Round::new(id, 1))]);
        let table = Table {
            game: game.clone(),
            rounds,
        };
        self.tables.write().await.insert(id, Arc::new(Mutex::new(table)));
        log::info!("opened game {} ({} vs {})", id, name1, name2);
        Ok(game)
    }

    /// Snapshot of the game record.
    pub async fn game(&self, id: GameId) -> ArenaResult<Game> {
        Ok(self.table(id).await?.lock().await.game.clone())
    }

    /// Records one player's move for a round. Resubmission before the
    /// round settles overwrites the earlier move; once settled the round
    /// is immutable and further submissions are rejected. Returns whether
    /// the round is now complete.
    pub async fn submit_choice(
        &self,
        game_id: GameId,
        round_number: RoundNumber,
        player: PlayerId,
        choice: Choice,
    ) -> ArenaResult<bool> {
        let table = self.table(game_id).await?;
        let mut table = table.lock().await;
        let seat = table
            .game
            .seat_of(player)
            .ok_or(ArenaError::Forbidden(player, game_id))?;
        let verdict = {
            let round = table
                .rounds
                .get_mut(&round_number)
                .ok_or(ArenaError::RoundNotFound(game_id, round_number))?;
            if round.completed {
                return Err(ArenaError::Conflict(format!(
                    "round {} of game {} is already settled",
                    round_number, game_id
                )));
            }
            round.record(seat, choice);
            log::debug!(
                "game {} round {}: recorded {} from player {}",
                game_id,
                round_number,
                choice,
                player
            );
            round.settle()
        };
        if let Some(verdict) = verdict {
            table.game.award(verdict.winner);
            log::info!(
                "game {} round {} settled: {}",
                game_id,
                round_number,
                verdict.message
            );
        }
        Ok(verdict.is_some())
    }

    /// Result of a settled round, with up-to-date scores. Pending until
    /// both moves are in; available immediately after the second lands.
    pub async fn round_result(
        &self,
        game_id: GameId,
        round_number: RoundNumber,
    ) -> ArenaResult<(Outcome, Game)> {
        let table = self.table(game_id).await?;
        let table = table.lock().await;
        let round = table
            .rounds
            .get(&round_number)
            .ok_or(ArenaError::RoundNotFound(game_id, round_number))?;
        match (round.completed, round.outcome()) {
            (false, _) => Err(ArenaError::Pending),
            (true, Some(outcome)) => Ok((outcome, table.game.clone())),
            (true, None) => Err(ArenaError::Internal(format!(
                "settled round {} of game {} is missing its verdict",
                round_number, game_id
            ))),
        }
    }

    /// Advances the game to its next round, leaving the prior round's
    /// data untouched and queryable. The current round must be settled
    /// first; skipping an unresolved round is rejected.
    pub async fn advance_round(&self, game_id: GameId) -> ArenaResult<Game> {
        let table = self.table(game_id).await?;
        let mut table = table.lock().await;
        let current = table.game.current_round;
        let settled = table
            .rounds
            .get(&current)
            .ok_or_else(|| {
                ArenaError::Internal(format!("game {} lost round {}", game_id, current))
            })?
            .completed;
        if !settled {
            return Err(ArenaError::Conflict(format!(
                "round {} of game {} is still in play",
                current, game_id
            )));
        }
        let next = current + 1;
        table.game.current_round = next;
        table.rounds.insert(next, Round::new(game_id, next));
        log::info!("game {} advanced to round {}", game_id, next);
        Ok(table.game.clone())
    }

    /// Client-facing projection of one game: players, scores, and the
    /// composite status synthesized from the current round's phase.
    pub async fn game_view(&self, id: GameId) -> ArenaResult<GameView> {
        let table = self.table(id).await?;
        let table = table.lock().await;
        let round = table.rounds.get(&table.game.current_round).ok_or_else(|| {
            ArenaError::Internal(format!(
                "game {} lost round {}",
                id, table.game.current_round
            ))
        })?;
        let roster = self.roster.read().await;
        let player1 = roster
            .player(table.game.player1_id)
            .ok_or_else(|| ArenaError::Internal(format!("game {} has an unknown player 1", id)))?;
        let player2 = roster
            .player(table.game.player2_id)
            .ok_or_else(|| ArenaError::Internal(format!("game {} has an unknown player 2", id)))?;
        Ok(GameView::project(&table.game, round, player1, player2))
    }

    async fn table(&self, id: GameId) -> ArenaResult<Arc<Mutex<Table>>> {
        self.tables
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ArenaError::GameNotFound(id))
    }

    fn screen(name: &str) -> ArenaResult<()> {
        if name.is_empty() {
            Err(ArenaError::Invalid(String::from(
                "player name must not be empty",
            )))
        } else if name.chars().count() > NAME_LIMIT {
            Err(ArenaError::Invalid(format!(
                "player name must be at most {} characters",
                NAME_LIMIT
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Winner;

    #[tokio::test]
    async fn full_round_resolves_and_scores() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        assert!(game.current_round == 1);
        let done = lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Rock)
            .await
            .unwrap();
        assert!(!done);
        assert!(matches!(
            lobby.round_result(game.id, 1).await,
            Err(ArenaError::Pending)
        ));
        let done = lobby
            .submit_choice(game.id, 1, game.player2_id, Choice::Scissors)
            .await
            .unwrap();
        assert!(done);
        let (outcome, updated) = lobby.round_result(game.id, 1).await.unwrap();
        assert!(outcome.winner == Winner::PlayerOne);
        assert!(outcome.message == "Rock crushes Scissors");
        assert!(updated.player1_score == 1);
        assert!(updated.player2_score == 0);
    }

    #[tokio::test]
    async fn draws_change_no_score() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Spock)
            .await
            .unwrap();
        lobby
            .submit_choice(game.id, 1, game.player2_id, Choice::Spock)
            .await
            .unwrap();
        let (outcome, updated) = lobby.round_result(game.id, 1).await.unwrap();
        assert!(outcome.winner == Winner::Draw);
        assert!(updated.player1_score == 0 && updated.player2_score == 0);
    }

    #[tokio::test]
    async fn resubmission_before_settling_overwrites() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Rock)
            .await
            .unwrap();
        lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Paper)
            .await
            .unwrap();
        lobby
            .submit_choice(game.id, 1, game.player2_id, Choice::Scissors)
            .await
            .unwrap();
        let (outcome, updated) = lobby.round_result(game.id, 1).await.unwrap();
        assert!(outcome.player1_choice == Choice::Paper);
        assert!(outcome.winner == Winner::PlayerTwo);
        assert!(outcome.message == "Scissors cuts Paper");
        assert!(updated.player2_score == 1);
    }

    #[tokio::test]
    async fn settled_rounds_are_immutable() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Rock)
            .await
            .unwrap();
        lobby
            .submit_choice(game.id, 1, game.player2_id, Choice::Scissors)
            .await
            .unwrap();
        let again = lobby
            .submit_choice(game.id, 1, game.player2_id, Choice::Rock)
            .await;
        assert!(matches!(again, Err(ArenaError::Conflict(_))));
        let (outcome, updated) = lobby.round_result(game.id, 1).await.unwrap();
        assert!(outcome.winner == Winner::PlayerOne);
        assert!(updated.player1_score == 1);
        assert!(updated.player2_score == 0);
    }

    #[tokio::test]
    async fn foreign_players_are_rejected() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        let intruder = game.player1_id + game.player2_id + 1;
        let refused = lobby.submit_choice(game.id, 1, intruder, Choice::Rock).await;
        assert!(refused == Err(ArenaError::Forbidden(intruder, game.id)));
        let view = lobby.game_view(game.id).await.unwrap();
        assert!(view.status == Status::Player1Turn);
    }

    #[tokio::test]
    async fn advancing_requires_a_settled_round() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        assert!(matches!(
            lobby.advance_round(game.id).await,
            Err(ArenaError::Conflict(_))
        ));
        lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Lizard)
            .await
            .unwrap();
        assert!(matches!(
            lobby.advance_round(game.id).await,
            Err(ArenaError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn advancing_opens_an_empty_round() {
        let lobby = Lobby::default();
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        lobby
            .submit_choice(game.id, 1, game.player1_id, Choice::Rock)
            .await
            .unwrap();
        lobby
            .submit_choice(game.id, 1, game.player2_id, Choice::Paper)
            .await
            .unwrap();
        let advanced = lobby.advance_round(game.id).await.unwrap();
        assert!(advanced.current_round == 2);
        assert!(matches!(
            lobby.round_result(game.id, 2).await,
            Err(ArenaError::Pending)
        ));
        let (prior, _) = lobby.round_result(game.id, 1).await.unwrap();
        assert!(prior.message == "Paper covers Rock");
        assert!(prior.winner == Winner::PlayerTwo);
    }

    #[tokio::test]
    async fn names_resolve_to_stable_identities() {
        let lobby = Lobby::default();
        let first = lobby.create_game("Alice", "Bob").await.unwrap();
        let second = lobby.create_game("Bob", "Carol").await.unwrap();
        assert!(first.id != second.id);
        assert!(second.player1_id == first.player2_id);
        assert!(second.player2_id != first.player1_id);
    }

    #[tokio::test]
    async fn unknown_records_are_not_found() {
        let lobby = Lobby::default();
        assert!(lobby.game(99).await == Err(ArenaError::GameNotFound(99)));
        let game = lobby.create_game("Alice", "Bob").await.unwrap();
        let missing = lobby
            .submit_choice(game.id, 5, game.player1_id, Choice::Rock)
            .await;
        assert!(missing == Err(ArenaError::RoundNotFound(game.id, 5)));
        assert!(
            lobby.round_result(game.id, 5).await
                == Err(ArenaError::RoundNotFound(game.id, 5))
        );
    }

    #[tokio::test]
    async fn names_are_screened() {
        let lobby = Lobby::default();
        assert!(matches!(
            lobby.create_game("", "Bob").await,
            Err(ArenaError::Invalid(_))
        ));
        let long = "x".repeat(31);
        assert!(matches!(
            lobby.create_game("Alice", &long).await,
            Err(ArenaError::Invalid(_))
        ));
    }
}
