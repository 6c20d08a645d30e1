// Total-changed notifications
//
// Aggregators publish a `TotalChanged` event to their observers after every
// successful mutation and every reset. Observers run synchronously, before
// the mutating call returns.

pub use events::{TotalChanged, TotalKind};
pub use observer::TotalObserver;

mod events;
mod observer;
