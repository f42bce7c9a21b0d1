//! The server/cache fallback policy.
//!
//! A fetch that returns zero records is ambiguous: the collection may truly
//! be empty, or something upstream swallowed the data. When the local cache
//! is available, the last known-good snapshot is served instead of an empty
//! page. A definite connection failure is a different animal entirely - it
//! surfaces as a read-only connection-error state and the cache is never
//! consulted for it.

use tracing::{info, warn};

use crate::core::DataSource;
use crate::errors::Result;

use super::snapshot::{Cacheable, Collection, SnapshotStore};

/// A list ready for the controller, tagged with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedList<R> {
    /// The records to display
    pub records: Vec<R>,
    /// Which source produced them
    pub source: DataSource,
}

/// Resolves a server fetch result against the local cache.
///
/// Pass `store: None` when the persistence capability is unavailable; the
/// fallback is then skipped and an empty fetch stays empty.
pub async fn load_with_fallback<R: Cacheable>(
    fetched: Result<Vec<R>>,
    store: Option<&SnapshotStore>,
    collection: Collection,
) -> Result<LoadedList<R>> {
    let records = match fetched {
        Err(error) if error.is_connection() => {
            // Read-only presentation; deliberately no cache read here
            warn!(%collection, %error, "connection failure; entering read-only state");
            return Ok(LoadedList {
                records: Vec::new(),
                source: DataSource::ConnectionError,
            });
        }
        Err(error) => return Err(error),
        Ok(records) => records,
    };

    if !records.is_empty() {
        if let Some(store) = store {
            // A failed snapshot write must not cost us fresh server data
            if let Err(error) = store.save_all(collection, &records).await {
                warn!(%collection, %error, "cache snapshot write failed");
            }
        }
        return Ok(LoadedList {
            records,
            source: DataSource::Server,
        });
    }

    let Some(store) = store else {
        return Ok(LoadedList {
            records,
            source: DataSource::Empty,
        });
    };

    let cached = match store.get_all(collection).await {
        Ok(cached) => cached,
        Err(error) => {
            warn!(%collection, %error, "cache snapshot read failed");
            Vec::new()
        }
    };

    if cached.is_empty() {
        Ok(LoadedList {
            records: Vec::new(),
            source: DataSource::Empty,
        })
    } else {
        info!(%collection, count = cached.len(), "serving cached snapshot");
        Ok(LoadedList {
            records: cached,
            source: DataSource::CachedFallback,
        })
    }
}
