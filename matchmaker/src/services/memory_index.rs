//! In-memory discovery index
//!
//! Evaluates [`CandidateQuery`] clauses directly against stored profiles.
//! Results are ordered by user id so repeated searches are stable.

use std::collections::HashMap;

use tokio::sync::RwLock;

use shared::{UserId, UserProfile};

use crate::core::query::CandidateQuery;
use crate::error::StoreResult;
use crate::traits::DiscoveryIndex;

#[derive(Debug, Default)]
pub struct InMemoryDiscoveryIndex {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryDiscoveryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| (profile.user_id.clone(), profile))
            .collect();
        Self { profiles: RwLock::new(profiles) }
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DiscoveryIndex for InMemoryDiscoveryIndex {
    async fn get_by_id(&self, user_id: &UserId) -> StoreResult<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn search(&self, query: &CandidateQuery) -> StoreResult<Vec<UserProfile>> {
        let profiles = self.profiles.read().await;

        let mut hits: Vec<UserProfile> = profiles
            .values()
            .filter(|profile| query.matches(profile))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        if let Some(limit) = query.limit() {
            hits.truncate(limit);
        }
        Ok(hits)
    }

    async fn upsert(&self, profile: UserProfile) -> StoreResult<()> {
        self.profiles.write().await.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}
