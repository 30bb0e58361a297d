//! Swipe request / response payloads

use serde::{Deserialize, Serialize};

use crate::types::{MatchId, Preference, SwipeOutcome, UserId};

/// Body of `POST /swipe`. The acting user comes from the bearer token.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    pub target_user_id: UserId,
    pub preference: Preference,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwipeResponse {
    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
}

impl From<SwipeOutcome> for SwipeResponse {
    fn from(outcome: SwipeOutcome) -> Self {
        Self {
            matched: outcome.matched,
            match_id: outcome.match_id,
        }
    }
}
