pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::service::ClockService;
pub use config::CliConfig;
pub use core::encoder::{encode, CellGrid};
pub use domain::model::{GeoPoint, LocalMoment};
pub use utils::error::{Result, VrcError};
