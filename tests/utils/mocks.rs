use std::sync::Mutex;

use courtside::{TotalChanged, TotalKind, TotalObserver};
use rust_decimal::Decimal;

/// Observer that remembers every notification it receives
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TotalChanged>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TotalChanged> {
        self.events.lock().unwrap().clone()
    }

    pub fn totals(&self, kind: TotalKind) -> Vec<Decimal> {
        self.events()
            .into_iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.total)
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl TotalObserver for RecordingObserver {
    fn total_changed(&self, event: &TotalChanged) {
        self.events.lock().unwrap().push(*event);
    }

    fn observer_name(&self) -> &'static str {
        "RecordingObserver"
    }
}
