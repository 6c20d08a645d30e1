use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::{calculator::compute_fantasy_points, ScoringError};

/// Which half of the matchup a team plays for
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// The seven box-score counting stats that feed fantasy scoring
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatField {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    #[serde(alias = "threePointers")]
    #[strum(to_string = "three_pointers", serialize = "threePointers")]
    ThreePointers,
}

/// A player's counting stats for one game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub rebounds: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub steals: u32,
    #[serde(default)]
    pub blocks: u32,
    #[serde(default)]
    pub turnovers: u32,
    #[serde(default, alias = "threePointers")]
    pub three_pointers: u32,
}

impl StatLine {
    pub fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Points => self.points,
            StatField::Rebounds => self.rebounds,
            StatField::Assists => self.assists,
            StatField::Steals => self.steals,
            StatField::Blocks => self.blocks,
            StatField::Turnovers => self.turnovers,
            StatField::ThreePointers => self.three_pointers,
        }
    }

    pub fn set(&mut self, field: StatField, value: u32) {
        let slot = match field {
            StatField::Points => &mut self.points,
            StatField::Rebounds => &mut self.rebounds,
            StatField::Assists => &mut self.assists,
            StatField::Steals => &mut self.steals,
            StatField::Blocks => &mut self.blocks,
            StatField::Turnovers => &mut self.turnovers,
            StatField::ThreePointers => &mut self.three_pointers,
        };
        *slot = value;
    }
}

/// One player's stat line plus the fantasy points derived from it.
///
/// `fantasy_points` has no setter. It is recomputed from `stats` on every
/// construction and every edit, and deserializing a `PlayerStat` discards any
/// incoming `fantasy_points` value in favour of a fresh calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PlayerSeed")]
pub struct PlayerStat {
    id: String,
    player_name: String,
    #[serde(flatten)]
    stats: StatLine,
    fantasy_points: Decimal,
}

/// Wire shape accepted when seeding a roster from an outside source
#[derive(Debug, Clone, Deserialize)]
struct PlayerSeed {
    id: String,
    #[serde(alias = "playerName")]
    player_name: String,
    #[serde(flatten)]
    stats: StatLine,
}

impl From<PlayerSeed> for PlayerStat {
    fn from(seed: PlayerSeed) -> Self {
        Self::with_stats(seed.id, seed.player_name, seed.stats)
    }
}

impl PlayerStat {
    /// Creates a player with an all-zero stat line
    pub fn new(id: impl Into<String>, player_name: impl Into<String>) -> Self {
        Self::with_stats(id, player_name, StatLine::default())
    }

    pub fn with_stats(id: impl Into<String>, player_name: impl Into<String>, stats: StatLine) -> Self {
        Self {
            id: id.into(),
            player_name: player_name.into(),
            fantasy_points: compute_fantasy_points(&stats),
            stats,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn stats(&self) -> &StatLine {
        &self.stats
    }

    pub fn fantasy_points(&self) -> Decimal {
        self.fantasy_points
    }

    /// Replaces a single counting stat and returns the recomputed fantasy points
    pub(crate) fn apply(&mut self, field: StatField, value: u32) -> Decimal {
        self.stats.set(field, value);
        self.fantasy_points = compute_fantasy_points(&self.stats);
        self.fantasy_points
    }
}

/// A resolved team as handed over by the team-selection collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            abbreviation: None,
            conference: None,
            division: None,
        }
    }
}

/// Quarter number, always within 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Quarter(u8);

impl Quarter {
    pub const COUNT: usize = 4;

    pub fn all() -> impl Iterator<Item = Quarter> {
        (1..=Self::COUNT as u8).map(Quarter)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Quarter {
    type Error = ScoringError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Ok(Quarter(number))
        } else {
            Err(ScoringError::validation(format!(
                "quarter must be between 1 and 4, got {number}"
            )))
        }
    }
}

impl FromStr for Quarter {
    type Err = ScoringError;

    /// Parses a path segment such as `"3"`; anything that is not 1..=4 is a
    /// validation error, including numbers too large for `u8`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .map_err(|_| {
                ScoringError::validation(format!("quarter must be between 1 and 4, got {raw}"))
            })
            .and_then(Quarter::try_from)
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterEntry {
    pub quarter: Quarter,
    pub points: Decimal,
}
