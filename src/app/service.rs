use crate::domain::ports::{LocationResolver, TimezoneResolver};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Zone used whenever resolution fails for any reason.
pub const FALLBACK_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Resolves the current local time for a caller address.
///
/// A resolution failure at any stage (geolocation, timezone lookup) is not
/// an error to the caller: the service logs a warning and answers in the
/// fallback zone instead. No retries; the location resolver decides whether
/// results are cached.
pub struct ClockService {
    location: Arc<dyn LocationResolver>,
    timezone: Arc<dyn TimezoneResolver>,
    fallback: Tz,
    now: fn() -> DateTime<Utc>,
}

impl ClockService {
    pub fn new(location: Arc<dyn LocationResolver>, timezone: Arc<dyn TimezoneResolver>) -> Self {
        Self {
            location,
            timezone,
            fallback: FALLBACK_TIMEZONE,
            now: Utc::now,
        }
    }

    pub fn with_fallback(mut self, fallback: Tz) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replaces the wall clock, for deterministic tests.
    pub fn with_clock(mut self, now: fn() -> DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub async fn local_time(&self, address: &str) -> DateTime<Tz> {
        let zone = match self.location.resolve(address).await {
            Ok(point) => match self.timezone.resolve(point) {
                Some(tz) => tz,
                None => {
                    tracing::warn!(
                        "no timezone for ({}, {}), falling back to {}",
                        point.lat,
                        point.lon,
                        self.fallback
                    );
                    self.fallback
                }
            },
            Err(e) => {
                tracing::warn!(
                    "geolocation failed for {}: {}, falling back to {}",
                    address,
                    e,
                    self.fallback
                );
                self.fallback
            }
        };
        (self.now)().with_timezone(&zone)
    }
}
