use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::scoring::Side;

/// Which aggregate a total belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TotalKind {
    FantasyPoints,
    QuarterPoints,
}

/// Emitted by an aggregator once its total has been recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalChanged {
    pub side: Side,
    pub kind: TotalKind,
    pub total: Decimal,
}

impl TotalChanged {
    pub fn new(side: Side, kind: TotalKind, total: Decimal) -> Self {
        Self { side, kind, total }
    }
}
