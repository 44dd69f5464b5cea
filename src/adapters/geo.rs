use crate::domain::model::GeoPoint;
use crate::domain::ports::LocationResolver;
use crate::utils::error::{Result, VrcError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Response shape of `{endpoint}/{address}?fields=lat,lon`. The upstream
/// omits the fields entirely for unroutable addresses instead of erroring.
#[derive(Debug, Deserialize)]
struct GeoPayload {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Location lookup backed by the ip-api.com JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiLocationResolver {
    client: Client,
    endpoint: String,
}

impl IpApiLocationResolver {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { client, endpoint }
    }
}

#[async_trait]
impl LocationResolver for IpApiLocationResolver {
    async fn resolve(&self, address: &str) -> Result<GeoPoint> {
        let url = format!("{}/{}?fields=lat,lon", self.endpoint, address);
        tracing::debug!("geolocation lookup: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let payload: GeoPayload = response.json().await?;

        match (payload.lat, payload.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                tracing::debug!("resolved {} to ({}, {})", address, lat, lon);
                Ok(GeoPoint { lat, lon })
            }
            _ => Err(VrcError::LocationNotFound {
                address: address.to_string(),
            }),
        }
    }
}
