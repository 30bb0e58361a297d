//! Match detector: has one user already liked another?

use std::sync::Arc;

use shared::{component_debug, UserId};

use crate::core::deadline::Deadline;
use crate::error::MatchmakerResult;
use crate::traits::SwipeStore;

const COMPONENT: &str = "match_detector";

pub struct MatchDetector<S> {
    store: Arc<S>,
}

impl<S: SwipeStore> MatchDetector<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// True iff a like from `source` on `target` has been recorded
    ///
    /// Uses the inverse ("who swiped on `target`") lookup and scans every
    /// returned record, so append-only histories with several entries per
    /// pair are handled. No record at all means "no decision yet".
    pub async fn has_liked(&self, source: &UserId, target: &UserId, deadline: Deadline) -> MatchmakerResult<bool> {
        let swipes = deadline.run("swipes_on", self.store.swipes_on(target)).await?;

        let liked = swipes
            .iter()
            .filter(|swipe| &swipe.acting_user == source)
            .any(|swipe| swipe.preference.is_like());

        component_debug!(COMPONENT, "{} liked {}: {} ({} records on target)", source, target, liked, swipes.len());
        Ok(liked)
    }
}
