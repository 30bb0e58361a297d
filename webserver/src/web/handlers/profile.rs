//! `PUT /profile`: publish the caller's search projection

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};

use matchmaker::{DiscoveryIndex, SwipeStore};
use shared::{GeoPoint, ProfileUpdate, UserProfile};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::middleware::AuthenticatedUser;

pub async fn update_profile<S, I>(
    State(state): State<AppState<S, I>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> WebServerResult<Json<UserProfile>>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    let Json(update) = payload.map_err(|e| WebServerError::invalid_request(e.body_text()))?;

    if update.name.trim().is_empty() {
        return Err(WebServerError::invalid_request("name must not be empty"));
    }
    if update.gender.trim().is_empty() {
        return Err(WebServerError::invalid_request("gender must not be empty"));
    }
    GeoPoint::new(update.location.lat, update.location.lon)?;

    let profile = update.into_profile(user.id);
    state.discovery.publish_profile(profile.clone(), state.deadline()).await?;
    Ok(Json(profile))
}
