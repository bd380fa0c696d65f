// Profile subsystem: read-only store adapter, compiled-in defaults, and the
// aggregator that merges the two into one canonical profile per request.

pub mod aggregator;
pub mod defaults;
pub mod store;
