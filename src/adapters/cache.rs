use crate::domain::model::GeoPoint;
use crate::domain::ports::LocationResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use quick_cache::sync::Cache;
use std::time::{Duration, Instant};

/// Geolocation results rarely change for a given address; a week matches
/// the upstream's own guidance.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7);

const CACHE_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    expires_at: Instant,
    point: GeoPoint,
}

/// Memoizes successful lookups of an inner resolver by address.
///
/// Failures are never stored, so a transient upstream outage cannot poison
/// an address for the full TTL. The cache is the only shared mutable state
/// in the process and is safe for concurrent use.
pub struct CachedLocationResolver<R> {
    inner: R,
    cache: Cache<String, CacheEntry>,
    ttl: Duration,
}

impl<R> CachedLocationResolver<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::new(CACHE_CAPACITY),
            ttl,
        }
    }
}

#[async_trait]
impl<R: LocationResolver> LocationResolver for CachedLocationResolver<R> {
    async fn resolve(&self, address: &str) -> Result<GeoPoint> {
        if let Some(entry) = self.cache.get(address) {
            if entry.expires_at > Instant::now() {
                tracing::debug!("geolocation cache hit for {}", address);
                return Ok(entry.point);
            }
            self.cache.remove(address);
        }

        let point = self.inner.resolve(address).await?;
        self.cache.insert(
            address.to_string(),
            CacheEntry {
                expires_at: Instant::now() + self.ttl,
                point,
            },
        );
        Ok(point)
    }
}
