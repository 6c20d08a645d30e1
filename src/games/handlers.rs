use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    repository::SharedScoreboard,
    types::{
        ComparisonResponse, CreateGameRequest, GameDateRequest, GameResponse,
        QuarterPointsRequest, QuarterPointsResponse, ResetSideRequest, StatEditRequest,
        StatEditResponse, TeamSelection,
    },
};
use crate::scoreboard::Scoreboard;
use crate::scoring::{Quarter, Side, StatField, StatUpdate};
use crate::shared::{AppError, AppState};

async fn load_game(state: &AppState, game_id: Uuid) -> Result<SharedScoreboard, AppError> {
    state
        .game_repository
        .get_game(game_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {game_id} not found")))
}

/// HTTP handler for opening a game session
///
/// POST /games
#[instrument(name = "create_game", skip(state, request))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    info!(game_date = %request.game_date, "Creating game session");

    let mut scoreboard =
        Scoreboard::with_default_roster_size(request.game_date, state.default_roster_size);
    for (side, selection) in [(Side::Home, request.home), (Side::Away, request.away)] {
        if let Some(TeamSelection { team, players }) = selection {
            scoreboard.select_team(side, team, players);
        }
    }

    let snapshot = scoreboard.snapshot();
    let id = state.game_repository.create_game(scoreboard).await?;

    info!(game_id = %id, "Game session created");
    Ok((
        StatusCode::CREATED,
        Json(GameResponse {
            id,
            scoreboard: snapshot,
        }),
    ))
}

/// GET /games/:id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameResponse>, AppError> {
    let game = load_game(&state, game_id).await?;
    let scoreboard = game.lock().await;

    Ok(Json(GameResponse {
        id: game_id,
        scoreboard: scoreboard.snapshot(),
    }))
}

/// DELETE /games/:id
#[instrument(name = "delete_game", skip(state))]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.game_repository.delete_game(game_id).await? {
        info!(game_id = %game_id, "Game session ended");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Game {game_id} not found")))
    }
}

/// PUT /games/:id/date
#[instrument(name = "set_game_date", skip(state, request))]
pub async fn set_game_date(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<GameDateRequest>,
) -> Result<Json<GameResponse>, AppError> {
    let game = load_game(&state, game_id).await?;
    let mut scoreboard = game.lock().await;

    let changed = scoreboard.set_game_date(request.game_date);
    info!(game_id = %game_id, game_date = %request.game_date, changed, "Game date set");

    Ok(Json(GameResponse {
        id: game_id,
        scoreboard: scoreboard.snapshot(),
    }))
}

/// PUT /games/:id/:side/team
#[instrument(name = "select_team", skip(state, selection))]
pub async fn select_team(
    State(state): State<AppState>,
    Path((game_id, side)): Path<(Uuid, Side)>,
    Json(selection): Json<TeamSelection>,
) -> Result<Json<GameResponse>, AppError> {
    let game = load_game(&state, game_id).await?;
    let mut scoreboard = game.lock().await;

    scoreboard.select_team(side, selection.team, selection.players);

    Ok(Json(GameResponse {
        id: game_id,
        scoreboard: scoreboard.snapshot(),
    }))
}

/// DELETE /games/:id/:side/team
#[instrument(name = "clear_team", skip(state))]
pub async fn clear_team(
    State(state): State<AppState>,
    Path((game_id, side)): Path<(Uuid, Side)>,
) -> Result<Json<GameResponse>, AppError> {
    let game = load_game(&state, game_id).await?;
    let mut scoreboard = game.lock().await;

    scoreboard.clear_team(side);

    Ok(Json(GameResponse {
        id: game_id,
        scoreboard: scoreboard.snapshot(),
    }))
}

/// PATCH /games/:id/:side/players/:player_id
#[instrument(name = "update_player_stat", skip(state, request))]
pub async fn update_player_stat(
    State(state): State<AppState>,
    Path((game_id, side, player_id)): Path<(Uuid, Side, String)>,
    Json(request): Json<StatEditRequest>,
) -> Result<Json<StatEditResponse>, AppError> {
    let field = StatField::from_str(&request.field).map_err(|_| {
        warn!(field = %request.field, "Unknown stat field in edit");
        AppError::Validation(format!("Unknown stat field '{}'", request.field))
    })?;

    let game = load_game(&state, game_id).await?;
    let mut scoreboard = game.lock().await;

    let update = scoreboard.set_stat(side, &player_id, field, request.value)?;
    let players = scoreboard.side(side).players();

    Ok(Json(StatEditResponse {
        applied: matches!(update, StatUpdate::Applied { .. }),
        player: players.player(&player_id).cloned(),
        team_total: players.team_total(),
        fantasy: scoreboard.fantasy_comparison(),
    }))
}

/// PUT /games/:id/:side/quarters/:quarter
#[instrument(name = "set_quarter_points", skip(state, request))]
pub async fn set_quarter_points(
    State(state): State<AppState>,
    Path((game_id, side, quarter)): Path<(Uuid, Side, String)>,
    Json(request): Json<QuarterPointsRequest>,
) -> Result<Json<QuarterPointsResponse>, AppError> {
    let quarter = Quarter::from_str(&quarter)?;
    let game = load_game(&state, game_id).await?;
    let mut scoreboard = game.lock().await;

    let total = scoreboard.set_quarter_points(side, quarter.number(), request.points)?;

    Ok(Json(QuarterPointsResponse {
        quarter: quarter.number(),
        points: request.points,
        total,
        quarters: scoreboard.quarter_comparison(),
    }))
}

/// POST /games/:id/:side/reset
#[instrument(name = "reset_side", skip(state, request))]
pub async fn reset_side(
    State(state): State<AppState>,
    Path((game_id, side)): Path<(Uuid, Side)>,
    Json(request): Json<ResetSideRequest>,
) -> Result<Json<GameResponse>, AppError> {
    let game = load_game(&state, game_id).await?;
    let mut scoreboard = game.lock().await;

    scoreboard.reset_side(side, request.player_ids);
    info!(game_id = %game_id, side = %side, "Side reset");

    Ok(Json(GameResponse {
        id: game_id,
        scoreboard: scoreboard.snapshot(),
    }))
}

/// GET /games/:id/comparison
#[instrument(name = "get_comparison", skip(state))]
pub async fn get_comparison(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let game = load_game(&state, game_id).await?;
    let scoreboard = game.lock().await;

    Ok(Json(ComparisonResponse {
        fantasy: scoreboard.fantasy_comparison().into(),
        quarters: scoreboard.quarter_comparison().into(),
        quarter_breakdown: scoreboard.quarter_breakdown(),
        leading_team: scoreboard.leading_team(),
    }))
}
