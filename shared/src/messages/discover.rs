//! Discovery request / response payloads

use serde::{Deserialize, Serialize};

use crate::types::{DiscoverFilters, UserProfile};

/// Body of `POST /discover`; every field optional
pub type DiscoverRequest = DiscoverFilters;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DiscoverResponse {
    pub users: Vec<UserProfile>,
}

impl From<Vec<UserProfile>> for DiscoverResponse {
    fn from(users: Vec<UserProfile>) -> Self {
        Self { users }
    }
}
