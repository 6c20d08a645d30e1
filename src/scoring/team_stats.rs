use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::event::{TotalChanged, TotalKind, TotalObserver};

use super::{calculator::round_fantasy, PlayerStat, ScoringError, Side, StatField};

/// Outcome of a single stat edit that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatUpdate {
    /// The stat was written and totals recomputed
    Applied {
        fantasy_points: Decimal,
        team_total: Decimal,
    },
    /// No player with that id is on the roster; nothing changed
    UnknownPlayer,
}

/// Owns one team's player stat lines for a game and keeps the team's
/// fantasy total in step with them.
pub struct TeamStatAggregator {
    side: Side,
    players: Vec<PlayerStat>,
    total: Decimal,
    observers: Vec<Arc<dyn TotalObserver>>,
}

impl TeamStatAggregator {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            players: Vec::new(),
            total: Decimal::ZERO,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn TotalObserver>) {
        debug!(
            side = %self.side,
            observer = observer.observer_name(),
            "Observer subscribed to fantasy total"
        );
        self.observers.push(observer);
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn players(&self) -> &[PlayerStat] {
        &self.players
    }

    pub fn player(&self, player_id: &str) -> Option<&PlayerStat> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn player_ids(&self) -> Vec<String> {
        self.players.iter().map(|p| p.id().to_string()).collect()
    }

    /// Sum of every player's fantasy points, one decimal place
    pub fn team_total(&self) -> Decimal {
        self.total
    }

    /// Writes one counting stat for one player.
    ///
    /// The value must be a non-negative whole number. A rejected value leaves
    /// the roster untouched and publishes nothing. An unknown player id is
    /// not an error: it is logged and reported as [`StatUpdate::UnknownPlayer`].
    pub fn set_stat(
        &mut self,
        player_id: &str,
        field: StatField,
        value: Decimal,
    ) -> Result<StatUpdate, ScoringError> {
        let count = validate_count(field, value)?;

        let Some(player) = self.players.iter_mut().find(|p| p.id() == player_id) else {
            warn!(
                side = %self.side,
                player_id = %player_id,
                field = %field,
                "Stat edit for player not on roster - ignoring"
            );
            return Ok(StatUpdate::UnknownPlayer);
        };

        let fantasy_points = player.apply(field, count);
        debug!(
            side = %self.side,
            player_id = %player_id,
            field = %field,
            value = count,
            fantasy_points = %fantasy_points,
            "Player stat updated"
        );

        self.recompute();
        self.publish();

        Ok(StatUpdate::Applied {
            fantasy_points,
            team_total: self.total,
        })
    }

    /// Replaces the roster with zero-stat entries for the given ids.
    ///
    /// Players already on the roster keep their display name; new ids are
    /// named `Player <id>`. Duplicate ids are dropped. Always publishes, even
    /// though the new total is zero.
    pub fn reset<I, S>(&mut self, player_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let roster: Vec<PlayerStat> = player_ids
            .into_iter()
            .map(Into::into)
            .filter(|id| seen.insert(id.clone()))
            .map(|id| {
                let name = self
                    .player(&id)
                    .map(|p| p.player_name().to_string())
                    .unwrap_or_else(|| format!("Player {id}"));
                PlayerStat::new(id, name)
            })
            .collect();

        debug!(side = %self.side, players = roster.len(), "Roster reset");
        self.players = roster;
        self.recompute();
        self.publish();
    }

    /// Replaces the roster with players from an outside source.
    ///
    /// Fantasy points are recomputed from each stat line rather than trusted.
    /// When an id repeats, the first occurrence wins.
    pub fn seed<I>(&mut self, players: I)
    where
        I: IntoIterator<Item = PlayerStat>,
    {
        let mut seen = HashSet::new();
        let mut roster = Vec::new();

        for player in players {
            if !seen.insert(player.id().to_string()) {
                warn!(
                    side = %self.side,
                    player_id = %player.id(),
                    "Duplicate player id in seeded roster - keeping first"
                );
                continue;
            }
            roster.push(PlayerStat::with_stats(
                player.id(),
                player.player_name(),
                *player.stats(),
            ));
        }

        debug!(side = %self.side, players = roster.len(), "Roster seeded");
        self.players = roster;
        self.recompute();
        self.publish();
    }

    fn recompute(&mut self) {
        let sum: Decimal = self.players.iter().map(PlayerStat::fantasy_points).sum();
        self.total = round_fantasy(sum);
    }

    fn publish(&self) {
        let event = TotalChanged::new(self.side, TotalKind::FantasyPoints, self.total);
        debug!(
            side = %self.side,
            total = %self.total,
            observers = self.observers.len(),
            "Fantasy total changed"
        );
        for observer in &self.observers {
            observer.total_changed(&event);
        }
    }
}

fn validate_count(field: StatField, value: Decimal) -> Result<u32, ScoringError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ScoringError::validation(format!(
            "{field} cannot be negative, got {value}"
        )));
    }
    if !value.fract().is_zero() {
        return Err(ScoringError::validation(format!(
            "{field} must be a whole number, got {value}"
        )));
    }
    value
        .to_u32()
        .ok_or_else(|| ScoringError::validation(format!("{field} is out of range, got {value}")))
}
