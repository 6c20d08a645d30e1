use super::events::TotalChanged;

/// Trait for components that react to an aggregator's total changing
///
/// Observers are called inline by the aggregator that owns the total, so an
/// implementation must not call back into that aggregator.
pub trait TotalObserver: Send + Sync {
    fn total_changed(&self, event: &TotalChanged);

    /// Get a human-readable name for this observer (for logging/debugging)
    fn observer_name(&self) -> &'static str;
}
