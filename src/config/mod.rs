use crate::adapters::geo;
use crate::utils::error::{Result, VrcError};
use crate::utils::validation::{self, Validate};
use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vrctime")]
#[command(about = "Serves the caller's local time as a tiny bit-encoded PNG")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    #[arg(long, default_value = geo::DEFAULT_ENDPOINT)]
    pub geo_endpoint: String,

    #[arg(
        long,
        default_value = "x-real-ip",
        help = "Trusted proxy header carrying the caller address"
    )]
    pub ip_header: String,

    #[arg(long, default_value = "Asia/Tokyo")]
    pub fallback_timezone: String,

    #[arg(
        long,
        default_value = "604800",
        help = "Geolocation cache TTL in seconds"
    )]
    pub cache_ttl_secs: u64,

    #[arg(long, default_value = "8", help = "Pixel size of one grid cell")]
    pub cell_size: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn fallback_tz(&self) -> Result<Tz> {
        self.fallback_timezone
            .parse()
            .map_err(|e| VrcError::InvalidConfigValue {
                field: "fallback-timezone".to_string(),
                value: self.fallback_timezone.clone(),
                reason: format!("Unknown IANA timezone: {}", e),
            })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("geo-endpoint", &self.geo_endpoint)?;
        validation::validate_timezone("fallback-timezone", &self.fallback_timezone)?;
        validation::validate_positive("cache-ttl-secs", self.cache_ttl_secs as usize, 1)?;
        validation::validate_positive("cell-size", self.cell_size as usize, 1)?;
        Ok(())
    }
}
