//! Load response with cache status

use chrono::DateTime;
use chrono::Utc;

/// Rows returned by a load, tagged with whether the row cache served them.
///
/// # Example
///
/// ```ignore
/// let response = table.load().await?;
///
/// if response.is_cached() {
///     log::debug!("rows cached at {:?}", response.cached_at());
/// }
/// let count = response.data().len();
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    data: T,
    /// How the row cache took part in this load.
    pub cache: CacheStatus,
}

impl<T> Response<T> {
    /// Wraps rows fetched with caching disabled.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cache: CacheStatus::None,
        }
    }

    /// Wraps rows fetched from the source and stored in the cache.
    pub fn cache_miss(data: T, cached_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            data,
            cache: CacheStatus::Miss {
                cached_at,
                expires_at,
            },
        }
    }

    /// Wraps rows served from the cache.
    pub fn cache_hit(data: T, cached_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            data,
            cache: CacheStatus::Hit {
                cached_at,
                expires_at,
            },
        }
    }

    /// Returns `true` if the source was not called.
    pub fn is_cached(&self) -> bool {
        self.cache.is_hit()
    }

    /// Returns when the rows entered the cache, if they did.
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        match self.cache {
            CacheStatus::None => None,
            CacheStatus::Miss { cached_at, .. } | CacheStatus::Hit { cached_at, .. } => {
                Some(cached_at)
            }
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Converts the payload, keeping the cache status.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            data: f(self.data),
            cache: self.cache,
        }
    }
}

/// Cache involvement in a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Caching is disabled (zero TTL).
    None,
    /// Fetched from the source, now cached until `expires_at`.
    Miss {
        cached_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    },
    /// Served from a live cache entry.
    Hit {
        cached_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    },
}

impl CacheStatus {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss { .. })
    }
}
