use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use tracing::debug;

use crate::event::{TotalChanged, TotalKind, TotalObserver};
use crate::scoring::{MatchupComparator, MatchupComparison, Side};

#[derive(Debug, Default)]
struct BoardState {
    fantasy: MatchupComparison,
    quarters: MatchupComparison,
}

/// Keeps the latest fantasy and quarter comparisons for a game.
///
/// Subscribed to both sides' aggregators; each notification replaces the
/// reporting side's total and recomputes that kind's comparison.
#[derive(Debug, Default)]
pub struct MatchupBoard {
    state: Mutex<BoardState>,
}

impl MatchupBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fantasy(&self) -> MatchupComparison {
        self.lock().fantasy
    }

    pub fn quarters(&self) -> MatchupComparison {
        self.lock().quarters
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TotalObserver for MatchupBoard {
    fn total_changed(&self, event: &TotalChanged) {
        let mut state = self.lock();
        let current = match event.kind {
            TotalKind::FantasyPoints => &mut state.fantasy,
            TotalKind::QuarterPoints => &mut state.quarters,
        };

        let (home, away): (Decimal, Decimal) = match event.side {
            Side::Home => (event.total, current.away),
            Side::Away => (current.home, event.total),
        };
        *current = MatchupComparator::compare_in(event.kind, home, away);

        debug!(
            kind = %event.kind,
            home = %current.home,
            away = %current.away,
            leader = %current.leader,
            "Matchup comparison recomputed"
        );
    }

    fn observer_name(&self) -> &'static str {
        "MatchupBoard"
    }
}
