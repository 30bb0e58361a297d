//! Shared request state handed to every handler

use std::sync::Arc;
use std::time::Instant;

use matchmaker::{Deadline, DiscoveryIndex, DiscoveryService, MatchmakerConfig, SwipeRecorder, SwipeStore};

use crate::traits::IdentityVerifier;

pub struct AppState<S, I> {
    pub recorder: Arc<SwipeRecorder<S>>,
    pub discovery: Arc<DiscoveryService<S, I>>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub config: MatchmakerConfig,
    pub started_at: Instant,
}

// Manual impl: `S` and `I` themselves need not be Clone
impl<S, I> Clone for AppState<S, I> {
    fn clone(&self) -> Self {
        Self {
            recorder: self.recorder.clone(),
            discovery: self.discovery.clone(),
            verifier: self.verifier.clone(),
            config: self.config.clone(),
            started_at: self.started_at,
        }
    }
}

impl<S, I> AppState<S, I>
where
    S: SwipeStore,
    I: DiscoveryIndex,
{
    /// Wire the core services around one swipe store and one discovery index
    pub fn new(store: Arc<S>, index: Arc<I>, verifier: Arc<dyn IdentityVerifier>, config: MatchmakerConfig) -> Self {
        Self {
            recorder: Arc::new(SwipeRecorder::new(store.clone(), config.clone())),
            discovery: Arc::new(DiscoveryService::new(store, index, config.clone())),
            verifier,
            config,
            started_at: Instant::now(),
        }
    }

    /// Fresh deadline for one request
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.config.store_timeout)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
