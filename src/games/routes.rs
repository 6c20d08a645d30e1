use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use crate::session;
use crate::shared::AppState;

/// Builds the full HTTP application. Everything under `/games` sits behind
/// the current-user gate; `/health` does not.
pub fn router(state: AppState) -> Router {
    let games = Router::new()
        .route("/games", post(handlers::create_game))
        .route(
            "/games/:id",
            get(handlers::get_game).delete(handlers::delete_game),
        )
        .route("/games/:id/date", put(handlers::set_game_date))
        .route("/games/:id/comparison", get(handlers::get_comparison))
        .route(
            "/games/:id/:side/team",
            put(handlers::select_team).delete(handlers::clear_team),
        )
        .route(
            "/games/:id/:side/players/:player_id",
            patch(handlers::update_player_stat),
        )
        .route(
            "/games/:id/:side/quarters/:quarter",
            put(handlers::set_quarter_points),
        )
        .route("/games/:id/:side/reset", post(handlers::reset_side))
        .route_layer(middleware::from_fn(session::require_user));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(games)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
