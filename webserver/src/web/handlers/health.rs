//! `GET /health`

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use matchmaker::{DiscoveryIndex, SwipeStore};

use crate::state::AppState;

pub async fn health<S, I>(State(state): State<AppState<S, I>>) -> Json<Value>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSeconds": state.uptime_seconds(),
        "consistency": state.config.consistency.to_string(),
    }))
}
