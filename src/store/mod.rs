//! Local cache store and the server/cache fallback policy.

/// Resolution of server fetches against the cache
pub mod fallback;
/// The SQLite-backed snapshot store
pub mod snapshot;

pub use fallback::{load_with_fallback, LoadedList};
pub use snapshot::{Cacheable, Collection, SnapshotStore};
