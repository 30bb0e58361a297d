//! Discovery orchestrator
//!
//! exclusion set (swipe store) -> requester profile (index) -> query -> search

use std::sync::Arc;

use shared::{component_debug, component_warn, DiscoverFilters, UserId, UserProfile};

use crate::config::MatchmakerConfig;
use crate::core::deadline::Deadline;
use crate::core::query::build_query;
use crate::error::{MatchmakerError, MatchmakerResult};
use crate::traits::{DiscoveryIndex, SwipeStore};

const COMPONENT: &str = "discovery";

pub struct DiscoveryService<S, I> {
    store: Arc<S>,
    index: Arc<I>,
    config: MatchmakerConfig,
}

impl<S, I> DiscoveryService<S, I>
where
    S: SwipeStore,
    I: DiscoveryIndex,
{
    pub fn new(store: Arc<S>, index: Arc<I>, config: MatchmakerConfig) -> Self {
        Self { store, index, config }
    }

    /// Candidates for `acting`, never including anyone they already swiped on
    pub async fn discover(
        &self,
        acting: &UserId,
        filters: &DiscoverFilters,
        deadline: Deadline,
    ) -> MatchmakerResult<Vec<UserProfile>> {
        let mut excluded = deadline
            .run("swiped_targets", self.store.swiped_targets(acting))
            .await
            .inspect_err(|err| {
                component_warn!(COMPONENT, "Exclusion lookup for {} failed: {}", acting, err);
            })?;

        let requester = deadline
            .run("get_by_id", self.index.get_by_id(acting))
            .await
            .inspect_err(|err| {
                component_warn!(COMPONENT, "Profile lookup for {} failed: {}", acting, err);
            })?
            .ok_or_else(|| MatchmakerError::ProfileNotFound { user_id: acting.to_string() })?;

        if self.config.exclude_self_from_discovery {
            excluded.push(acting.clone());
        }

        let query = build_query(&excluded, filters, requester.location).with_limit(self.config.max_candidates);
        component_debug!(
            COMPONENT,
            "Searching for {} with {} clauses ({} excluded ids)",
            acting,
            query.clauses().len(),
            excluded.len()
        );

        let mut candidates = deadline
            .run("search", self.index.search(&query))
            .await
            .inspect_err(|err| {
                component_warn!(COMPONENT, "Candidate search for {} failed: {}", acting, err);
            })?;

        // The index may trail the swipe store; drop anything the query excluded.
        if let Some(ids) = query.excluded_ids() {
            let before = candidates.len();
            candidates.retain(|profile| !ids.contains(&profile.user_id));
            if candidates.len() != before {
                component_debug!(COMPONENT, "Dropped {} excluded candidates", before - candidates.len());
            }
        }

        Ok(candidates)
    }

    /// Publish a profile projection to the index
    pub async fn publish_profile(&self, profile: UserProfile, deadline: Deadline) -> MatchmakerResult<()> {
        let user_id = profile.user_id.clone();
        deadline
            .run("upsert", self.index.upsert(profile))
            .await
            .inspect_err(|err| {
                component_warn!(COMPONENT, "Profile upsert for {} failed: {}", user_id, err);
            })
    }
}
