pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{Cli, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

/// Build the full route table over a shared [`AppState`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/brands", get(routes::brands::list_brands))
        .route(
            "/games",
            get(routes::games::get_game)
                .post(routes::games::create_game)
                .patch(routes::games::update_game)
                .delete(routes::games::delete_game),
        )
        .route(
            "/rounds",
            post(routes::rounds::create_round).patch(routes::rounds::update_round),
        )
        .route("/rounds/reveal", post(routes::rounds::reveal_role))
        .route("/logo", get(routes::logo::logo_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
