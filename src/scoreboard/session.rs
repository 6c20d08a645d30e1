use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::{MatchupBoard, QuarterBreakdown, ScoreboardSnapshot, SideSnapshot};
use crate::scoring::{
    MatchupComparison, PlayerStat, QuarterScoreTracker, ScoringError, Side, StatField, StatUpdate,
    Team, TeamStatAggregator,
};

/// Roster size used when a team is selected without a seeded roster
pub const DEFAULT_ROSTER_SIZE: usize = 5;

/// Everything tracked for one team in the game
pub struct TeamSide {
    team: Option<Team>,
    players: TeamStatAggregator,
    quarters: QuarterScoreTracker,
}

impl TeamSide {
    fn new(side: Side, board: &Arc<MatchupBoard>) -> Self {
        let mut players = TeamStatAggregator::new(side);
        let mut quarters = QuarterScoreTracker::new(side);
        players.subscribe(board.clone());
        quarters.subscribe(board.clone());

        Self {
            team: None,
            players,
            quarters,
        }
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn players(&self) -> &TeamStatAggregator {
        &self.players
    }

    pub fn quarters(&self) -> &QuarterScoreTracker {
        &self.quarters
    }
}

/// Game session state for a single matchup on a single date
pub struct Scoreboard {
    game_date: NaiveDate,
    home: TeamSide,
    away: TeamSide,
    board: Arc<MatchupBoard>,
    default_roster_size: usize,
}

impl Scoreboard {
    pub fn new(game_date: NaiveDate) -> Self {
        Self::with_default_roster_size(game_date, DEFAULT_ROSTER_SIZE)
    }

    pub fn with_default_roster_size(game_date: NaiveDate, default_roster_size: usize) -> Self {
        let board = Arc::new(MatchupBoard::new());
        Self {
            game_date,
            home: TeamSide::new(Side::Home, &board),
            away: TeamSide::new(Side::Away, &board),
            board,
            default_roster_size,
        }
    }

    pub fn game_date(&self) -> NaiveDate {
        self.game_date
    }

    pub fn side(&self, side: Side) -> &TeamSide {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut TeamSide {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Selects the team for one side.
    ///
    /// With a seed the roster is taken from it verbatim (fantasy points are
    /// recomputed); otherwise placeholder players `1..=N` are created. The
    /// matchup has changed, so quarter points start over on both sides.
    pub fn select_team(&mut self, side: Side, team: Team, seed: Option<Vec<PlayerStat>>) {
        info!(side = %side, team_id = %team.id, team_name = %team.name, "Team selected");
        let roster_size = self.default_roster_size;
        let target = self.side_mut(side);

        target.team = Some(team);
        match seed {
            Some(players) => target.players.seed(players),
            None => target
                .players
                .reset((1..=roster_size).map(|n| n.to_string())),
        }
        self.reset_all_quarters();
    }

    /// Deselects the team for one side, leaving an empty roster. Quarter
    /// points start over on both sides.
    pub fn clear_team(&mut self, side: Side) {
        info!(side = %side, "Team cleared");
        let target = self.side_mut(side);
        target.team = None;
        target.players.reset(Vec::<String>::new());
        self.reset_all_quarters();
    }

    /// Moves the session to another date. Both sides keep their players but
    /// every stat and quarter goes back to zero. Returns `false` when the
    /// date is unchanged, in which case nothing is reset.
    pub fn set_game_date(&mut self, game_date: NaiveDate) -> bool {
        if game_date == self.game_date {
            debug!(game_date = %game_date, "Game date unchanged");
            return false;
        }

        info!(from = %self.game_date, to = %game_date, "Game date changed - resetting both sides");
        self.game_date = game_date;
        for side in [Side::Home, Side::Away] {
            self.reset_side(side, None);
        }
        true
    }

    /// Zeroes one side's roster and quarters
    pub fn reset_side(&mut self, side: Side, player_ids: Option<Vec<String>>) {
        self.reset_roster(side, player_ids);
        self.reset_quarters(side);
    }

    /// Zeroes one side's stat lines. `player_ids` replaces the roster when
    /// given; the current roster ids are reused otherwise.
    pub fn reset_roster(&mut self, side: Side, player_ids: Option<Vec<String>>) {
        let players = &mut self.side_mut(side).players;
        let ids = player_ids.unwrap_or_else(|| players.player_ids());
        players.reset(ids);
    }

    pub fn reset_quarters(&mut self, side: Side) {
        self.side_mut(side).quarters.reset();
    }

    fn reset_all_quarters(&mut self) {
        for side in [Side::Home, Side::Away] {
            self.reset_quarters(side);
        }
    }

    pub fn set_stat(
        &mut self,
        side: Side,
        player_id: &str,
        field: StatField,
        value: Decimal,
    ) -> Result<StatUpdate, ScoringError> {
        self.side_mut(side).players.set_stat(player_id, field, value)
    }

    pub fn set_quarter_points(
        &mut self,
        side: Side,
        quarter: u8,
        value: Decimal,
    ) -> Result<Decimal, ScoringError> {
        self.side_mut(side).quarters.set_quarter_points(quarter, value)
    }

    pub fn fantasy_comparison(&self) -> MatchupComparison {
        self.board.fantasy()
    }

    pub fn quarter_comparison(&self) -> MatchupComparison {
        self.board.quarters()
    }

    pub fn quarter_breakdown(&self) -> QuarterBreakdown {
        QuarterBreakdown {
            home: self.home.quarters.breakdown(),
            away: self.away.quarters.breakdown(),
        }
    }

    /// Name of the side ahead on fantasy points, or "Tied"
    pub fn leading_team(&self) -> String {
        let home = self.home.team.as_ref().map_or("Home", |t| t.name.as_str());
        let away = self.away.team.as_ref().map_or("Away", |t| t.name.as_str());
        self.fantasy_comparison().leader.label(home, away).to_string()
    }

    pub fn snapshot(&self) -> ScoreboardSnapshot {
        ScoreboardSnapshot {
            game_date: self.game_date,
            home: SideSnapshot::from(&self.home),
            away: SideSnapshot::from(&self.away),
            fantasy: self.fantasy_comparison(),
            quarters: self.quarter_comparison(),
            quarter_breakdown: self.quarter_breakdown(),
            leading_team: self.leading_team(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Leader, StatLine};
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn scoreboard_with_teams() -> Scoreboard {
        let mut scoreboard = Scoreboard::new(date(1));
        scoreboard.select_team(Side::Home, Team::new("LAL", "Lakers"), None);
        scoreboard.select_team(Side::Away, Team::new("BOS", "Celtics"), None);
        scoreboard
    }

    #[test]
    fn selecting_team_creates_default_roster() {
        let scoreboard = scoreboard_with_teams();
        let home = scoreboard.side(Side::Home);

        assert_eq!(home.team().unwrap().name, "Lakers");
        assert_eq!(home.players().player_ids(), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(home.players().players()[2].player_name(), "Player 3");
        assert_eq!(home.quarters().total(), Decimal::ZERO);
    }

    #[test]
    fn selecting_team_with_seed_uses_seeded_roster() {
        let mut scoreboard = Scoreboard::new(date(1));
        let seed = vec![PlayerStat::with_stats(
            "0",
            "Jayson Tatum",
            StatLine {
                points: 30,
                rebounds: 10,
                ..StatLine::default()
            },
        )];

        scoreboard.select_team(Side::Away, Team::new("BOS", "Celtics"), Some(seed));

        assert_eq!(scoreboard.side(Side::Away).players().team_total(), dec!(42.0));
        assert_eq!(scoreboard.fantasy_comparison().away, dec!(42.0));
        assert_eq!(scoreboard.leading_team(), "Celtics");
    }

    #[test]
    fn edits_flow_into_matchup_comparisons() {
        let mut scoreboard = scoreboard_with_teams();

        scoreboard
            .set_stat(Side::Home, "1", StatField::Points, dec!(31))
            .unwrap();
        scoreboard
            .set_stat(Side::Away, "2", StatField::Steals, dec!(3))
            .unwrap();
        scoreboard.set_quarter_points(Side::Home, 1, dec!(27)).unwrap();
        scoreboard.set_quarter_points(Side::Away, 1, dec!(29)).unwrap();

        let fantasy = scoreboard.fantasy_comparison();
        assert_eq!(fantasy.home, dec!(31.0));
        assert_eq!(fantasy.away, dec!(9.0));
        assert_eq!(fantasy.leader, Leader::Home);
        assert_eq!(scoreboard.leading_team(), "Lakers");

        let quarters = scoreboard.quarter_comparison();
        assert_eq!(quarters.differential, dec!(-2));
        assert_eq!(quarters.leader, Leader::Away);
        assert_eq!(scoreboard.quarter_breakdown().away[0], dec!(29));
    }

    #[test]
    fn rejected_edit_leaves_comparison_alone() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard.set_quarter_points(Side::Home, 2, dec!(20)).unwrap();

        let result = scoreboard.set_quarter_points(Side::Home, 5, dec!(40));

        assert!(result.is_err());
        assert_eq!(scoreboard.quarter_comparison().home, dec!(20));
    }

    #[test]
    fn date_change_resets_both_sides_but_keeps_players() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard
            .set_stat(Side::Home, "4", StatField::Assists, dec!(8))
            .unwrap();
        scoreboard.set_quarter_points(Side::Away, 3, dec!(25)).unwrap();

        assert!(scoreboard.set_game_date(date(2)));

        assert_eq!(scoreboard.game_date(), date(2));
        assert_eq!(scoreboard.side(Side::Home).players().team_total(), Decimal::ZERO);
        assert_eq!(scoreboard.side(Side::Home).players().players().len(), 5);
        assert_eq!(scoreboard.side(Side::Away).quarters().total(), Decimal::ZERO);
        assert_eq!(scoreboard.fantasy_comparison(), MatchupComparison::default());
    }

    #[test]
    fn same_date_is_a_no_op() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard
            .set_stat(Side::Home, "1", StatField::Points, dec!(10))
            .unwrap();

        assert!(!scoreboard.set_game_date(date(1)));
        assert_eq!(scoreboard.side(Side::Home).players().team_total(), dec!(10.0));
    }

    #[test]
    fn clearing_team_empties_side() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard
            .set_stat(Side::Away, "1", StatField::Blocks, dec!(2))
            .unwrap();

        scoreboard.clear_team(Side::Away);

        let away = scoreboard.side(Side::Away);
        assert!(away.team().is_none());
        assert!(away.players().players().is_empty());
        assert_eq!(scoreboard.fantasy_comparison().away, Decimal::ZERO);
        assert_eq!(scoreboard.leading_team(), "Tied");
    }

    #[test]
    fn selecting_opponent_resets_quarters_on_both_sides() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard.set_quarter_points(Side::Home, 1, dec!(30)).unwrap();
        scoreboard.set_quarter_points(Side::Away, 2, dec!(27)).unwrap();
        scoreboard
            .set_stat(Side::Home, "1", StatField::Points, dec!(18))
            .unwrap();

        scoreboard.select_team(Side::Away, Team::new("NYK", "Knicks"), None);

        assert_eq!(scoreboard.side(Side::Home).quarters().total(), Decimal::ZERO);
        assert_eq!(scoreboard.side(Side::Away).quarters().total(), Decimal::ZERO);
        assert_eq!(scoreboard.quarter_comparison(), MatchupComparison::default());
        assert_eq!(scoreboard.side(Side::Home).players().team_total(), dec!(18.0));
    }

    #[test]
    fn clearing_team_resets_opponent_quarters() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard.set_quarter_points(Side::Away, 4, dec!(22)).unwrap();

        scoreboard.clear_team(Side::Home);

        assert_eq!(scoreboard.quarter_breakdown().away, [Decimal::ZERO; 4]);
    }

    #[test]
    fn reset_roster_keeps_quarters() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard
            .set_stat(Side::Away, "3", StatField::Rebounds, dec!(11))
            .unwrap();
        scoreboard.set_quarter_points(Side::Away, 1, dec!(26)).unwrap();

        scoreboard.reset_roster(Side::Away, None);

        let away = scoreboard.side(Side::Away);
        assert_eq!(away.players().team_total(), Decimal::ZERO);
        assert_eq!(away.players().player_ids(), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(away.quarters().total(), dec!(26));
    }

    #[test]
    fn reset_quarters_keeps_roster() {
        let mut scoreboard = scoreboard_with_teams();
        scoreboard
            .set_stat(Side::Home, "2", StatField::Assists, dec!(6))
            .unwrap();
        scoreboard.set_quarter_points(Side::Home, 3, dec!(31)).unwrap();
        scoreboard.set_quarter_points(Side::Away, 3, dec!(19)).unwrap();

        scoreboard.reset_quarters(Side::Home);

        assert_eq!(scoreboard.side(Side::Home).quarters().total(), Decimal::ZERO);
        assert_eq!(scoreboard.side(Side::Away).quarters().total(), dec!(19));
        assert_eq!(scoreboard.side(Side::Home).players().team_total(), dec!(9.0));
        assert_eq!(scoreboard.quarter_comparison().leader, Leader::Away);
    }

    #[test]
    fn reset_side_with_new_ids_replaces_roster() {
        let mut scoreboard = scoreboard_with_teams();

        scoreboard.reset_side(Side::Home, Some(vec!["6".into(), "23".into()]));

        assert_eq!(
            scoreboard.side(Side::Home).players().player_ids(),
            vec!["6", "23"]
        );
    }
}
