use std::cmp::Ordering;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::event::TotalKind;

/// Any team total strictly above this activates the bonus
pub const BONUS_THRESHOLD: Decimal = dec!(250);

/// Bounds applied to the lead percentage when drawing the comparison bar
pub const DISPLAY_MIN_PERCENT: Decimal = dec!(10);
pub const DISPLAY_MAX_PERCENT: Decimal = dec!(90);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    Home,
    Away,
    Tied,
}

impl Leader {
    /// Name to show for the leading side; a tie reads "Tied"
    pub fn label<'a>(&self, home_name: &'a str, away_name: &'a str) -> &'a str {
        match self {
            Leader::Home => home_name,
            Leader::Away => away_name,
            Leader::Tied => "Tied",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Leader::Home => Leader::Away,
            Leader::Away => Leader::Home,
            Leader::Tied => Leader::Tied,
        }
    }
}

/// Head-to-head view over a home total and an away total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupComparison {
    pub home: Decimal,
    pub away: Decimal,
    pub differential: Decimal,
    pub leader: Leader,
    /// Raw `|differential| / (home + away) * 100`, unclamped
    pub percentage_lead: Decimal,
    pub bonus_active: bool,
}

impl Default for MatchupComparison {
    fn default() -> Self {
        MatchupComparator::compare(Decimal::ZERO, Decimal::ZERO)
    }
}

impl MatchupComparison {
    /// Lead percentage clamped into the range the comparison bar can draw
    pub fn display_proportion(&self) -> Decimal {
        self.percentage_lead
            .clamp(DISPLAY_MIN_PERCENT, DISPLAY_MAX_PERCENT)
    }
}

/// Stateless comparison of two team totals
pub struct MatchupComparator;

impl MatchupComparator {
    /// Compares fantasy point totals, bonus rule included
    pub fn compare(home: Decimal, away: Decimal) -> MatchupComparison {
        Self::compare_in(TotalKind::FantasyPoints, home, away)
    }

    /// Compares two totals of the given kind. Only fantasy point totals carry
    /// the bonus rule. Totals that cancel out (`home + away == 0`) compare as
    /// a tie with no lead and no bonus, whatever their individual values.
    pub fn compare_in(kind: TotalKind, home: Decimal, away: Decimal) -> MatchupComparison {
        let differential = home.saturating_sub(away);

        let combined = home.checked_add(away);
        if combined.is_some_and(|sum| sum.is_zero()) {
            return MatchupComparison {
                home,
                away,
                differential,
                leader: Leader::Tied,
                percentage_lead: Decimal::ZERO,
                bonus_active: false,
            };
        }

        let leader = match home.cmp(&away) {
            Ordering::Greater => Leader::Home,
            Ordering::Less => Leader::Away,
            Ordering::Equal => Leader::Tied,
        };

        // Same-sign totals near Decimal::MAX overflow the sum; halve both sides.
        let percentage_lead = match combined {
            Some(sum) => lead_percentage(differential.abs(), sum),
            None => {
                let (half_home, half_away) = (home / dec!(2), away / dec!(2));
                lead_percentage((half_home - half_away).abs(), half_home + half_away)
            }
        };

        let bonus_active = kind == TotalKind::FantasyPoints
            && (home > BONUS_THRESHOLD || away > BONUS_THRESHOLD);

        MatchupComparison {
            home,
            away,
            differential,
            leader,
            percentage_lead,
            bonus_active,
        }
    }
}

fn lead_percentage(lead: Decimal, combined: Decimal) -> Decimal {
    lead.checked_div(combined)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}
