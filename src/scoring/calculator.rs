use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use super::{StatField, StatLine};

/// Decimal places kept on fantasy point values
pub const FANTASY_POINT_SCALE: u32 = 1;

/// Per-unit fantasy value of each counting stat. Turnovers count against the player.
pub fn fantasy_weight(field: StatField) -> Decimal {
    match field {
        StatField::Points => dec!(1.0),
        StatField::Rebounds => dec!(1.2),
        StatField::Assists => dec!(1.5),
        StatField::Steals => dec!(3.0),
        StatField::Blocks => dec!(3.0),
        StatField::Turnovers => dec!(-1.0),
        StatField::ThreePointers => dec!(0.5),
    }
}

/// Computes a player's fantasy points from their stat line.
///
/// All weights are exact decimals so the weighted sum carries no
/// representation error; the result is rounded to one decimal place with
/// ties going away from zero.
pub fn compute_fantasy_points(stats: &StatLine) -> Decimal {
    let raw: Decimal = StatField::iter()
        .map(|field| Decimal::from(stats.get(field)) * fantasy_weight(field))
        .sum();

    round_fantasy(raw)
}

pub(crate) fn round_fantasy(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(FANTASY_POINT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
