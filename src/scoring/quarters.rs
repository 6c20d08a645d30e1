use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::event::{TotalChanged, TotalKind, TotalObserver};

use super::{Quarter, QuarterEntry, ScoringError, Side};

/// Owns the four quarter point values for one team in one game
pub struct QuarterScoreTracker {
    side: Side,
    points: [Decimal; Quarter::COUNT],
    total: Decimal,
    observers: Vec<Arc<dyn TotalObserver>>,
}

impl QuarterScoreTracker {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            points: [Decimal::ZERO; Quarter::COUNT],
            total: Decimal::ZERO,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn TotalObserver>) {
        debug!(
            side = %self.side,
            observer = observer.observer_name(),
            "Observer subscribed to quarter total"
        );
        self.observers.push(observer);
    }

    /// Overwrites one quarter's points and returns the new game total
    pub fn set_quarter_points(&mut self, quarter: u8, value: Decimal) -> Result<Decimal, ScoringError> {
        let quarter = Quarter::try_from(quarter)?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ScoringError::validation(format!(
                "Q{} points cannot be negative, got {value}",
                quarter.number()
            )));
        }

        let mut points = self.points;
        points[quarter.index()] = value;
        let total = checked_total(&points).ok_or_else(|| {
            ScoringError::validation(format!(
                "Q{} points of {value} push the game total out of range",
                quarter.number()
            ))
        })?;

        self.points = points;
        self.total = total;
        debug!(
            side = %self.side,
            quarter = quarter.number(),
            points = %value,
            "Quarter points updated"
        );

        self.publish();
        Ok(self.total)
    }

    pub fn quarter_points(&self, quarter: Quarter) -> Decimal {
        self.points[quarter.index()]
    }

    /// Unrounded sum of the four quarters
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn entries(&self) -> Vec<QuarterEntry> {
        Quarter::all()
            .map(|quarter| QuarterEntry {
                quarter,
                points: self.quarter_points(quarter),
            })
            .collect()
    }

    pub fn breakdown(&self) -> [Decimal; Quarter::COUNT] {
        self.points
    }

    pub fn reset(&mut self) {
        self.points = [Decimal::ZERO; Quarter::COUNT];
        self.total = Decimal::ZERO;
        debug!(side = %self.side, "Quarter points reset");
        self.publish();
    }

    fn publish(&self) {
        let event = TotalChanged::new(self.side, TotalKind::QuarterPoints, self.total);
        debug!(
            side = %self.side,
            total = %self.total,
            observers = self.observers.len(),
            "Quarter total changed"
        );
        for observer in &self.observers {
            observer.total_changed(&event);
        }
    }
}

fn checked_total(points: &[Decimal; Quarter::COUNT]) -> Option<Decimal> {
    points
        .iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(*value))
}
