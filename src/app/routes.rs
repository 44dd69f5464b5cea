use crate::app::service::ClockService;
use crate::core::{encoder, renderer};
use crate::domain::model::LocalMoment;
use crate::utils::error::{Result, VrcError};
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub struct AppState {
    pub clock: ClockService,
    /// Trusted proxy header carrying the caller address, lowercase.
    pub ip_header: String,
    pub cell_size: u32,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/vrctime", get(vrc_time))
        .route("/vrctime_test", get(vrc_time_test))
        .with_state(state)
}

async fn index() -> &'static str {
    ""
}

fn caller_address(state: &AppState, headers: &HeaderMap) -> Result<String> {
    headers
        .get(&state.ip_header)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| VrcError::MissingHeader {
            name: state.ip_header.clone(),
        })
}

async fn vrc_time(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let address = caller_address(&state, &headers)?;
    let now = state.clock.local_time(&address).await;

    let grid = encoder::encode(&LocalMoment::of(&now));
    let png = renderer::render(&grid, state.cell_size)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

async fn vrc_time_test(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<String> {
    let address = caller_address(&state, &headers)?;
    let now = state.clock.local_time(&address).await;

    Ok(format!(
        "ip: {}, time: {}",
        address,
        now.format("%m/%d/%Y, %H:%M:%S")
    ))
}
