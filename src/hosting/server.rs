use super::*;
use crate::arena::Lobby;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    /// Binds `BIND_ADDR` (default `0.0.0.0:8080`) and serves until
    /// interrupted. One lobby backs all workers.
    pub async fn run() -> Result<(), std::io::Error> {
        let lobby = web::Data::new(Lobby::default());
        let addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
        log::info!("starting game server on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(lobby.clone())
                .configure(routes)
        })
        .workers(4)
        .bind(addr)?
        .run()
        .await
    }
}

/// Route table, shared with boundary tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("/games", web::post().to(create_game))
            .route("/games/{id}", web::get().to(get_game))
            .route("/games/{id}/state", web::get().to(get_state))
            .route("/games/{id}/choices", web::post().to(submit_choice))
            .route("/games/{id}/rounds/{round}/result", web::get().to(round_result))
            .route("/games/{id}/nextRound", web::post().to(next_round)),
    );
}
