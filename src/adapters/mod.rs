// Adapters layer: concrete implementations for external systems.

pub mod cache;
pub mod geo;
pub mod tz;
