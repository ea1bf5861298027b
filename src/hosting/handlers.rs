use crate::GameId;
use crate::RoundNumber;
use crate::arena::ArenaError;
use crate::arena::Lobby;
use crate::dto::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn create_game(
    lobby: web::Data<Lobby>,
    body: web::Json<CreateGame>,
) -> impl Responder {
    match lobby
        .create_game(&body.player1_name, &body.player2_name)
        .await
    {
        Ok(game) => HttpResponse::Created().json(ApiGame::from(game)),
        Err(e) => fail(e),
    }
}

pub async fn get_game(lobby: web::Data<Lobby>, path: web::Path<GameId>) -> impl Responder {
    match lobby.game(path.into_inner()).await {
        Ok(game) => HttpResponse::Ok().json(ApiGame::from(game)),
        Err(e) => fail(e),
    }
}

pub async fn get_state(lobby: web::Data<Lobby>, path: web::Path<GameId>) -> impl Responder {
    match lobby.game_view(path.into_inner()).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => fail(e),
    }
}

pub async fn submit_choice(
    lobby: web::Data<Lobby>,
    path: web::Path<GameId>,
    body: web::Json<SubmitChoice>,
) -> impl Responder {
    let id = path.into_inner();
    let body = body.into_inner();
    match lobby
        .submit_choice(id, body.round_number, body.player_id, body.choice)
        .await
    {
        Ok(complete) => HttpResponse::Ok().json(ApiChoiceAck {
            game_id: id,
            round_number: body.round_number,
            player_id: body.player_id,
            submitted: true,
            round_complete: complete,
        }),
        Err(e) => fail(e),
    }
}

pub async fn round_result(
    lobby: web::Data<Lobby>,
    path: web::Path<(GameId, RoundNumber)>,
) -> impl Responder {
    let (id, number) = path.into_inner();
    match lobby.round_result(id, number).await {
        Ok((outcome, game)) => HttpResponse::Ok().json(ApiRoundResult::from((number, outcome, game))),
        Err(e) => fail(e),
    }
}

pub async fn next_round(lobby: web::Data<Lobby>, path: web::Path<GameId>) -> impl Responder {
    match lobby.advance_round(path.into_inner()).await {
        Ok(game) => HttpResponse::Ok().json(ApiNextRound {
            game_id: game.id,
            current_round: game.current_round,
        }),
        Err(e) => fail(e),
    }
}

/// Maps the store taxonomy onto the statuses the polling client expects.
/// `Pending` rides the 404 the client already retries on.
fn fail(e: ArenaError) -> HttpResponse {
    if let ArenaError::Internal(_) = e {
        log::error!("{}", e);
    }
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        ArenaError::Invalid(_) => HttpResponse::BadRequest().json(body),
        ArenaError::GameNotFound(_) => HttpResponse::NotFound().json(body),
        ArenaError::RoundNotFound(..) => HttpResponse::NotFound().json(body),
        ArenaError::Forbidden(..) => HttpResponse::Forbidden().json(body),
        ArenaError::Pending => HttpResponse::NotFound().json(body),
        ArenaError::Conflict(_) => HttpResponse::Conflict().json(body),
        ArenaError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}
