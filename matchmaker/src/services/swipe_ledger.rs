//! In-memory swipe ledger
//!
//! Keeps decisions indexed by acting user and by target user, plus the
//! pair -> match id record the conditional like write is decided against.
//! One mutex guards all three maps, so every write is atomic with respect to
//! every read.

use std::collections::HashMap;

use tokio::sync::Mutex;

use shared::{MatchId, PairKey, SwipeDecision, UserId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{LikeOutcome, SwipeStore};

#[derive(Debug, Default)]
struct Ledger {
    by_actor: HashMap<UserId, Vec<SwipeDecision>>,
    by_target: HashMap<UserId, Vec<SwipeDecision>>,
    matches: HashMap<PairKey, MatchId>,
}

impl Ledger {
    fn has_decided(&self, acting: &UserId, target: &UserId) -> bool {
        self.by_actor
            .get(acting)
            .is_some_and(|swipes| swipes.iter().any(|s| &s.target_user == target))
    }

    fn has_liked(&self, acting: &UserId, target: &UserId) -> bool {
        self.by_actor
            .get(acting)
            .is_some_and(|swipes| swipes.iter().any(|s| &s.target_user == target && s.preference.is_like()))
    }

    fn ensure_undecided(&self, decision: &SwipeDecision) -> StoreResult<()> {
        if self.has_decided(&decision.acting_user, &decision.target_user) {
            return Err(StoreError::Conflict {
                key: format!("{}->{}", decision.acting_user, decision.target_user),
            });
        }
        Ok(())
    }

    fn insert(&mut self, decision: SwipeDecision) {
        self.by_target
            .entry(decision.target_user.clone())
            .or_default()
            .push(decision.clone());
        self.by_actor
            .entry(decision.acting_user.clone())
            .or_default()
            .push(decision);
    }
}

/// Swipe store held in process memory
#[derive(Debug, Default)]
pub struct InMemorySwipeLedger {
    ledger: Mutex<Ledger>,
}

impl InMemorySwipeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match id recorded for the pair, if any
    pub async fn match_between(&self, a: &UserId, b: &UserId) -> Option<MatchId> {
        self.ledger.lock().await.matches.get(&PairKey::new(a, b)).copied()
    }

    /// Total number of stored decisions
    pub async fn len(&self) -> usize {
        self.ledger.lock().await.by_actor.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl SwipeStore for InMemorySwipeLedger {
    async fn put(&self, decision: SwipeDecision) -> StoreResult<()> {
        let mut ledger = self.ledger.lock().await;
        ledger.ensure_undecided(&decision)?;

        if let Some(match_id) = decision.match_id {
            ledger.matches.entry(decision.pair()).or_insert(match_id);
        }
        ledger.insert(decision);
        Ok(())
    }

    async fn put_like(&self, decision: SwipeDecision, match_id: MatchId) -> StoreResult<LikeOutcome> {
        let mut ledger = self.ledger.lock().await;
        ledger.ensure_undecided(&decision)?;

        let pair = decision.pair();
        let mutual = ledger.has_liked(&decision.target_user, &decision.acting_user);

        if mutual && !ledger.matches.contains_key(&pair) {
            ledger.matches.insert(pair, match_id);
            ledger.insert(decision.confirm_match(match_id));
            return Ok(LikeOutcome::Matched(match_id));
        }

        ledger.insert(decision);
        Ok(LikeOutcome::Pending)
    }

    async fn swiped_targets(&self, acting_user: &UserId) -> StoreResult<Vec<UserId>> {
        let ledger = self.ledger.lock().await;
        Ok(ledger
            .by_actor
            .get(acting_user)
            .map(|swipes| swipes.iter().map(|s| s.target_user.clone()).collect())
            .unwrap_or_default())
    }

    async fn swipes_on(&self, target_user: &UserId) -> StoreResult<Vec<SwipeDecision>> {
        let ledger = self.ledger.lock().await;
        Ok(ledger.by_target.get(target_user).cloned().unwrap_or_default())
    }
}
