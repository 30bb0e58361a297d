//! Store contracts with mockall annotations for testing
//!
//! The matchmaker core owns no state. Both the swipe ledger and the
//! discovery index are external collaborators reached through these traits,
//! so every orchestration path can be exercised against mocks.

use shared::{MatchId, SwipeDecision, UserId, UserProfile};

use crate::core::query::CandidateQuery;
use crate::error::StoreResult;

/// Result of a pair-conditional like write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Recorded; the counterpart has not liked back (or the pair is already matched)
    Pending,
    /// Recorded, and this write confirmed the pair with the given id
    Matched(MatchId),
}

/// Durable ledger of swipe decisions
///
/// Must answer "who did I swipe" (by acting user) and "who swiped on me"
/// (by target user) equally well.
#[mockall::automock]
#[async_trait::async_trait]
pub trait SwipeStore: Send + Sync {
    /// Persist one decision
    ///
    /// Insert-if-absent per (acting, target) direction: a second decision for
    /// the same direction fails with `StoreError::Conflict` and writes nothing.
    async fn put(&self, decision: SwipeDecision) -> StoreResult<()>;

    /// Persist a like through one conditional write keyed by the unordered pair
    ///
    /// Atomically records `decision` and, iff the counterpart like already
    /// exists and the pair carries no match id yet, assigns `match_id` to the
    /// pair and stores the decision as matched. Same conflict rule as `put`.
    async fn put_like(&self, decision: SwipeDecision, match_id: MatchId) -> StoreResult<LikeOutcome>;

    /// Targets `acting_user` has decided on, likes and dislikes alike
    async fn swiped_targets(&self, acting_user: &UserId) -> StoreResult<Vec<UserId>>;

    /// Every decision whose target is `target_user` (inverse lookup)
    async fn swipes_on(&self, target_user: &UserId) -> StoreResult<Vec<SwipeDecision>>;
}

/// Full-text / geo index holding discovery profiles
#[mockall::automock]
#[async_trait::async_trait]
pub trait DiscoveryIndex: Send + Sync {
    /// Point lookup; `Ok(None)` when the user has no indexed profile
    async fn get_by_id(&self, user_id: &UserId) -> StoreResult<Option<UserProfile>>;

    /// Execute a candidate query
    async fn search(&self, query: &CandidateQuery) -> StoreResult<Vec<UserProfile>>;

    /// Write-through of a profile projection
    async fn upsert(&self, profile: UserProfile) -> StoreResult<()>;
}
