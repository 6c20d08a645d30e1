use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoreboard::{QuarterBreakdown, ScoreboardSnapshot};
use crate::scoring::{MatchupComparison, PlayerStat, Team};

/// A team choice plus an optional roster from an outside feed
#[derive(Debug, Deserialize)]
pub struct TeamSelection {
    pub team: Team,
    #[serde(default)]
    pub players: Option<Vec<PlayerStat>>,
}

/// Request payload for opening a game session
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub game_date: NaiveDate,
    #[serde(default)]
    pub home: Option<TeamSelection>,
    #[serde(default)]
    pub away: Option<TeamSelection>,
}

#[derive(Debug, Deserialize)]
pub struct GameDateRequest {
    pub game_date: NaiveDate,
}

/// Request payload for a single stat edit.
///
/// `field` stays a string here so an unknown stat name comes back as a
/// validation error rather than a body-shape rejection.
#[derive(Debug, Deserialize)]
pub struct StatEditRequest {
    pub field: String,
    pub value: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct QuarterPointsRequest {
    pub points: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResetSideRequest {
    #[serde(default)]
    pub player_ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub scoreboard: ScoreboardSnapshot,
}

#[derive(Debug, Serialize)]
pub struct StatEditResponse {
    /// `false` when the player id was not on the roster
    pub applied: bool,
    pub player: Option<PlayerStat>,
    pub team_total: Decimal,
    pub fantasy: MatchupComparison,
}

#[derive(Debug, Serialize)]
pub struct QuarterPointsResponse {
    pub quarter: u8,
    pub points: Decimal,
    pub total: Decimal,
    pub quarters: MatchupComparison,
}

/// A comparison together with the bar width the dashboard should draw
#[derive(Debug, Serialize)]
pub struct ComparisonView {
    #[serde(flatten)]
    pub comparison: MatchupComparison,
    pub display_proportion: Decimal,
}

impl From<MatchupComparison> for ComparisonView {
    fn from(comparison: MatchupComparison) -> Self {
        Self {
            display_proportion: comparison.display_proportion(),
            comparison,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub fantasy: ComparisonView,
    pub quarters: ComparisonView,
    pub quarter_breakdown: QuarterBreakdown,
    pub leading_team: String,
}
