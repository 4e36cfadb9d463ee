//! Loader: fetches records through the row cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::cache::RowCache;
use crate::error::RemoteError;
use crate::model::SourceRecord;
use crate::response::Response;
use crate::source::RecordSource;

/// Owns the row cache and the fetch side of the record source.
///
/// The cache lock is held across the fetch, so concurrent loads run one after
/// another and each observes the result of the previous one.
pub(crate) struct Loader {
    source: Arc<dyn RecordSource>,
    cache: Mutex<RowCache>,
    caching: bool,
}

impl Loader {
    pub(crate) fn new(source: Arc<dyn RecordSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: Mutex::new(RowCache::new(ttl)),
            caching: !ttl.is_zero(),
        }
    }

    /// Returns the cached records, or fetches and caches them.
    pub(crate) async fn fetch(&self) -> Result<Response<Vec<SourceRecord>>, RemoteError> {
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.get() {
            log::debug!("Row cache hit: {} record(s)", entry.records.len());
            return Ok(Response::cache_hit(
                entry.records.clone(),
                entry.created_at,
                entry.expires_at,
            ));
        }

        let records = self.source.fetch_rows().await?;
        if !self.caching {
            return Ok(Response::new(records));
        }

        let entry = cache.store(records.clone());
        Ok(Response::cache_miss(records, entry.created_at, entry.expires_at))
    }

    /// Drops the cached records so the next fetch goes to the source.
    pub(crate) async fn invalidate(&self) {
        self.cache.lock().await.invalidate();
    }
}
