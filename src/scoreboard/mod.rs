// One live game: home and away rosters, quarter scores and the running matchup

pub use board::MatchupBoard;
pub use session::{Scoreboard, TeamSide, DEFAULT_ROSTER_SIZE};
pub use snapshot::{QuarterBreakdown, ScoreboardSnapshot, SideSnapshot};

mod board;
mod session;
mod snapshot;
