use crate::domain::model::GeoPoint;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono_tz::Tz;

/// Maps a caller address to approximate coordinates. Implementations may
/// call out to the network; successful results are safe to memoize by
/// address for a bounded duration.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, address: &str) -> Result<GeoPoint>;
}

/// Maps coordinates to an IANA timezone. Pure function of the point:
/// boundary data is static reference data, not request-dependent.
pub trait TimezoneResolver: Send + Sync {
    fn resolve(&self, point: GeoPoint) -> Option<Tz>;
}
