pub mod encoder;
pub mod renderer;

pub use crate::domain::model::{GeoPoint, LocalMoment};
pub use crate::domain::ports::{LocationResolver, TimezoneResolver};
pub use crate::utils::error::Result;
