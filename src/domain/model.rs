use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Best-effort coordinates of a caller, as reported by the geolocation
/// upstream. Both components are finite degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Calendar fields of a timestamp in its resolved zone. Built fresh per
/// request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// 0-999
    pub millisecond: u32,
    /// ISO weekday, 1=Monday .. 7=Sunday
    pub iso_weekday: u32,
}

impl LocalMoment {
    pub fn of<Z: TimeZone>(dt: &DateTime<Z>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            // chrono reports 1000+ during a leap second
            millisecond: dt.timestamp_subsec_millis().min(999),
            iso_weekday: dt.weekday().number_from_monday(),
        }
    }
}
