// Library crate for the live fantasy scoring service
// This file exposes the public API for integration tests

pub mod config;
pub mod event;
pub mod games;
pub mod scoreboard;
pub mod scoring;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use event::{TotalChanged, TotalKind, TotalObserver};
pub use games::{repository::InMemoryGameRepository, router};
pub use scoreboard::Scoreboard;
pub use scoring::{
    compute_fantasy_points, Leader, MatchupComparator, MatchupComparison, PlayerStat,
    QuarterScoreTracker, ScoringError, Side, StatField, StatLine, StatUpdate, Team,
    TeamStatAggregator,
};
pub use shared::{AppError, AppState};
