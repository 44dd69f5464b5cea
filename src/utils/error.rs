use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VrcError {
    #[error("geolocation request failed: {0}")]
    GeoApi(#[from] reqwest::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no coordinates for address {address}")]
    LocationNotFound { address: String },

    #[error("missing {name} header")]
    MissingHeader { name: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, VrcError>;

impl IntoResponse for VrcError {
    fn into_response(self) -> Response {
        let status = match &self {
            VrcError::MissingHeader { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
