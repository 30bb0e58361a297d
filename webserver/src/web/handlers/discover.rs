//! `POST /discover`
//!
//! The body is optional: an empty body means "no filters".

use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};

use matchmaker::{DiscoveryIndex, SwipeStore};
use shared::{DiscoverRequest, DiscoverResponse};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::middleware::AuthenticatedUser;

fn parse_filters(body: &[u8]) -> WebServerResult<DiscoverRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DiscoverRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| WebServerError::invalid_request(format!("invalid filters: {e}")))
}

pub async fn discover<S, I>(
    State(state): State<AppState<S, I>>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Bytes,
) -> WebServerResult<Json<DiscoverResponse>>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    let filters = parse_filters(&body)?;
    let users = state.discovery.discover(&user.id, &filters, state.deadline()).await?;
    Ok(Json(users.into()))
}
