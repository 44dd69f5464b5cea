use crate::domain::model::GeoPoint;
use crate::domain::ports::TimezoneResolver;
use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

/// Coordinate-to-timezone lookup over the bundled boundary data.
///
/// Construction parses the boundary set and is comparatively expensive;
/// build it once at startup and share it.
pub struct FinderTimezoneResolver {
    finder: DefaultFinder,
}

impl FinderTimezoneResolver {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for FinderTimezoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for FinderTimezoneResolver {
    fn resolve(&self, point: GeoPoint) -> Option<Tz> {
        let name = self.finder.get_tz_name(point.lon, point.lat);
        if name.is_empty() {
            tracing::debug!("no timezone polygon for ({}, {})", point.lat, point.lon);
            return None;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                tracing::warn!("boundary data produced unknown zone name {:?}", name);
                None
            }
        }
    }
}
