//! Row cache
//!
//! Holds the records returned by the last fetch together with their expiry.
//! The loader consults it before calling the record source; the submitter
//! invalidates it after the source accepts a batch so the next load fetches.

use std::time::Duration;

use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;

use crate::model::SourceRecord;

/// Records cached from one fetch, with metadata about when they were cached
/// and when they expire.
#[derive(Debug, Clone)]
pub struct CachedRecords {
    /// The fetched records, in source order.
    pub records: Vec<SourceRecord>,
    /// When the records were cached.
    pub created_at: DateTime<Utc>,
    /// When the records expire and must be fetched again.
    pub expires_at: DateTime<Utc>,
}

impl CachedRecords {
    /// Creates a cache entry with a TTL from now.
    ///
    /// A TTL reaching past the latest representable time never expires.
    pub fn with_ttl(records: Vec<SourceRecord>, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            records,
            created_at: now,
            expires_at,
        }
    }

    /// Returns `true` if this entry has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Single-entry cache for the table's record set.
///
/// Never returns an expired entry. A zero TTL disables caching: every entry
/// is expired as soon as it is stored.
#[derive(Debug)]
pub struct RowCache {
    ttl: Duration,
    entry: Option<CachedRecords>,
}

impl RowCache {
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Returns the cached records, if present and not expired.
    pub fn get(&mut self) -> Option<&CachedRecords> {
        if self.entry.as_ref().is_some_and(CachedRecords::is_expired) {
            self.entry = None;
        }
        self.entry.as_ref()
    }

    /// Stores a freshly fetched record set, replacing any previous entry.
    pub fn store(&mut self, records: Vec<SourceRecord>) -> &CachedRecords {
        self.entry.insert(CachedRecords::with_ttl(records, self.ttl))
    }

    /// Drops the cached entry so the next load fetches from the source.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Returns `true` if a live entry is cached.
    pub fn is_warm(&mut self) -> bool {
        self.get().is_some()
    }
}
