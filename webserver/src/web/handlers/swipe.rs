//! `POST /swipe`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};

use matchmaker::{DiscoveryIndex, SwipeStore};
use shared::{SwipeRequest, SwipeResponse};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::middleware::AuthenticatedUser;

pub async fn swipe<S, I>(
    State(state): State<AppState<S, I>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<SwipeRequest>, JsonRejection>,
) -> WebServerResult<Json<SwipeResponse>>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::invalid_request(e.body_text()))?;

    let outcome = state
        .recorder
        .record_swipe(&user.id, &request.target_user_id, request.preference, state.deadline())
        .await?;

    Ok(Json(outcome.into()))
}
