use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::scoring::{MatchupComparison, PlayerStat, Quarter, QuarterEntry, Team};

use super::TeamSide;

/// Per-quarter points for both sides, Q1 first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterBreakdown {
    pub home: [Decimal; Quarter::COUNT],
    pub away: [Decimal; Quarter::COUNT],
}

#[derive(Debug, Clone, Serialize)]
pub struct SideSnapshot {
    pub team: Option<Team>,
    pub players: Vec<PlayerStat>,
    pub fantasy_total: Decimal,
    pub quarters: Vec<QuarterEntry>,
    pub quarter_total: Decimal,
}

impl From<&TeamSide> for SideSnapshot {
    fn from(side: &TeamSide) -> Self {
        Self {
            team: side.team().cloned(),
            players: side.players().players().to_vec(),
            fantasy_total: side.players().team_total(),
            quarters: side.quarters().entries(),
            quarter_total: side.quarters().total(),
        }
    }
}

/// Read-only view of a whole game session
#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardSnapshot {
    pub game_date: NaiveDate,
    pub home: SideSnapshot,
    pub away: SideSnapshot,
    pub fantasy: MatchupComparison,
    pub quarters: MatchupComparison,
    pub quarter_breakdown: QuarterBreakdown,
    pub leading_team: String,
}
