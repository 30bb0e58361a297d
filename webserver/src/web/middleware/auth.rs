//! Bearer token authentication
//!
//! Every protected route runs behind [`require_auth`]. The verified user id
//! is inserted into the request extensions as [`AuthenticatedUser`]; handlers
//! never read identity from the request body.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;

use matchmaker::{DiscoveryIndex, SwipeStore};
use shared::{component_debug, UserId};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;

const COMPONENT: &str = "auth";

#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

pub async fn require_auth<S, I>(
    State(state): State<AppState<S, I>>,
    mut request: Request,
    next: Next,
) -> WebServerResult<Response>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    let token = bearer_token(request.headers())
        .ok_or_else(|| WebServerError::unauthorized("missing bearer token"))?;
    let id = state.verifier.verify(token)?;

    component_debug!(COMPONENT, "{} {} as {}", request.method(), request.uri().path(), id);
    request.extensions_mut().insert(AuthenticatedUser { id });
    Ok(next.run(request).await)
}
