// Fantasy scoring engine
//
// Turns box-score stat lines into fantasy points, rolls them up per team,
// sums quarter points into a game total and compares the two sides.

pub use calculator::{compute_fantasy_points, fantasy_weight, FANTASY_POINT_SCALE};
pub use errors::ScoringError;
pub use matchup::{Leader, MatchupComparator, MatchupComparison, BONUS_THRESHOLD};
pub use models::{PlayerStat, Quarter, QuarterEntry, Side, StatField, StatLine, Team};
pub use quarters::QuarterScoreTracker;
pub use team_stats::{StatUpdate, TeamStatAggregator};

mod calculator;
mod errors;
pub mod matchup;
mod models;
mod quarters;
mod team_stats;
