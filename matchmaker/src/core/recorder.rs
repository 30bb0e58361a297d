//! Swipe recorder
//!
//! Records one decision per call and reports whether it completed a match.
//! Every call performs exactly one store write; a failed write means nothing
//! is reported as persisted.
//!
//! With [`MatchConsistency::CheckThenWrite`] the detector read and the write
//! are two separate store calls, so two concurrent likes from both sides of
//! a pair can each see "no like yet" and neither is marked matched.
//! [`MatchConsistency::PairConditional`] moves the decision into a single
//! conditional write on the pair and closes that window.

use std::sync::Arc;

use shared::{component_info, component_warn, MatchId, Preference, SwipeDecision, SwipeOutcome, UserId};

use crate::config::{MatchConsistency, MatchmakerConfig};
use crate::core::deadline::Deadline;
use crate::core::detector::MatchDetector;
use crate::error::{MatchmakerError, MatchmakerResult, StoreError};
use crate::traits::{LikeOutcome, SwipeStore};

const COMPONENT: &str = "swipe_recorder";

pub struct SwipeRecorder<S> {
    store: Arc<S>,
    detector: MatchDetector<S>,
    config: MatchmakerConfig,
}

impl<S: SwipeStore> SwipeRecorder<S> {
    pub fn new(store: Arc<S>, config: MatchmakerConfig) -> Self {
        let detector = MatchDetector::new(store.clone());
        Self { store, detector, config }
    }

    pub fn config(&self) -> &MatchmakerConfig {
        &self.config
    }

    /// Record `acting`'s decision on `target`
    ///
    /// `acting` must already be a verified identity.
    pub async fn record_swipe(
        &self,
        acting: &UserId,
        target: &UserId,
        preference: Preference,
        deadline: Deadline,
    ) -> MatchmakerResult<SwipeOutcome> {
        if acting == target && !self.config.allow_self_swipe {
            return Err(MatchmakerError::validation("target_user", "cannot swipe on yourself"));
        }

        let outcome = match preference {
            Preference::Dislike => {
                let decision = SwipeDecision::unmatched(acting.clone(), target.clone(), Preference::Dislike);
                self.persist(decision, deadline).await?;
                SwipeOutcome::unmatched()
            }
            Preference::Like => match self.config.consistency {
                MatchConsistency::CheckThenWrite => self.like_check_then_write(acting, target, deadline).await?,
                MatchConsistency::PairConditional => self.like_pair_conditional(acting, target, deadline).await?,
            },
        };

        if let Some(match_id) = outcome.match_id {
            component_info!(COMPONENT, "💘 Match {} between {} and {}", match_id, acting, target);
        }
        Ok(outcome)
    }

    async fn like_check_then_write(
        &self,
        acting: &UserId,
        target: &UserId,
        deadline: Deadline,
    ) -> MatchmakerResult<SwipeOutcome> {
        let mutual = self.detector.has_liked(target, acting, deadline).await?;

        if mutual {
            let match_id = MatchId::new();
            self.persist(SwipeDecision::matched(acting.clone(), target.clone(), match_id), deadline)
                .await?;
            Ok(SwipeOutcome::matched(match_id))
        } else {
            self.persist(SwipeDecision::unmatched(acting.clone(), target.clone(), Preference::Like), deadline)
                .await?;
            Ok(SwipeOutcome::unmatched())
        }
    }

    async fn like_pair_conditional(
        &self,
        acting: &UserId,
        target: &UserId,
        deadline: Deadline,
    ) -> MatchmakerResult<SwipeOutcome> {
        let decision = SwipeDecision::unmatched(acting.clone(), target.clone(), Preference::Like);
        let candidate = MatchId::new();

        let result = deadline.run("put_like", self.store.put_like(decision, candidate)).await;
        match self.map_conflict(result, acting, target)? {
            LikeOutcome::Matched(match_id) => Ok(SwipeOutcome::matched(match_id)),
            LikeOutcome::Pending => Ok(SwipeOutcome::unmatched()),
        }
    }

    async fn persist(&self, decision: SwipeDecision, deadline: Deadline) -> MatchmakerResult<()> {
        let (acting, target) = (decision.acting_user.clone(), decision.target_user.clone());
        let result = deadline.run("put", self.store.put(decision)).await;
        self.map_conflict(result, &acting, &target)
    }

    /// Re-swipes surface as `AlreadySwiped`; other failures are logged and passed on
    fn map_conflict<T>(&self, result: MatchmakerResult<T>, acting: &UserId, target: &UserId) -> MatchmakerResult<T> {
        match result {
            Err(MatchmakerError::Storage { source: StoreError::Conflict { .. }, .. }) => {
                Err(MatchmakerError::AlreadySwiped {
                    acting_user: acting.to_string(),
                    target_user: target.to_string(),
                })
            }
            Err(err) => {
                component_warn!(COMPONENT, "Swipe {} -> {} not recorded: {}", acting, target, err);
                Err(err)
            }
            ok => ok,
        }
    }
}
