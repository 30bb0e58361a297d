//! Builders wiring the matchmaker core to mocked or in-memory stores

use std::sync::Arc;
use std::time::Duration;

use matchmaker::services::{InMemoryDiscoveryIndex, InMemorySwipeLedger};
use matchmaker::*;
use shared::{DiscoverFilters, Preference, SwipeOutcome, UserId, UserProfile};

use super::fixtures::TestFixtures;

/// Builder for a recorder or discovery service over mocks
///
/// No default expectations are installed: any store call a test did not
/// set up fails the test.
pub struct MatchmakerBuilder {
    config: MatchmakerConfig,
    store: MockSwipeStore,
    index: MockDiscoveryIndex,
}

impl MatchmakerBuilder {
    pub fn new() -> Self {
        Self {
            config: MatchmakerConfig::default(),
            store: MockSwipeStore::new(),
            index: MockDiscoveryIndex::new(),
        }
    }

    pub fn with_config(mut self, config: MatchmakerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_consistency(mut self, consistency: MatchConsistency) -> Self {
        self.config = self.config.with_consistency(consistency);
        self
    }

    /// Configure the swipe store mock with a setup function
    pub fn with_store<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockSwipeStore),
    {
        setup(&mut self.store);
        self
    }

    /// Configure the discovery index mock with a setup function
    pub fn with_index<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockDiscoveryIndex),
    {
        setup(&mut self.index);
        self
    }

    pub fn build_recorder(self) -> SwipeRecorder<MockSwipeStore> {
        SwipeRecorder::new(Arc::new(self.store), self.config)
    }

    pub fn build_discovery(self) -> DiscoveryService<MockSwipeStore, MockDiscoveryIndex> {
        DiscoveryService::new(Arc::new(self.store), Arc::new(self.index), self.config)
    }
}

/// Recorder and discovery service sharing one in-memory ledger and index
pub struct InMemoryMatchmaker {
    pub ledger: Arc<InMemorySwipeLedger>,
    pub index: Arc<InMemoryDiscoveryIndex>,
    pub recorder: SwipeRecorder<InMemorySwipeLedger>,
    pub discovery: DiscoveryService<InMemorySwipeLedger, InMemoryDiscoveryIndex>,
}

impl InMemoryMatchmaker {
    pub async fn swipe(&self, acting: &str, target: &str, preference: Preference) -> MatchmakerResult<SwipeOutcome> {
        self.recorder
            .record_swipe(
                &TestFixtures::user(acting),
                &TestFixtures::user(target),
                preference,
                TestHelpers::deadline(),
            )
            .await
    }

    pub async fn discover_ids(&self, acting: &str, filters: &DiscoverFilters) -> MatchmakerResult<Vec<String>> {
        let users = self
            .discovery
            .discover(&TestFixtures::user(acting), filters, TestHelpers::deadline())
            .await?;
        Ok(TestHelpers::ids(&users))
    }
}

pub struct TestHelpers;

impl TestHelpers {
    pub fn deadline() -> Deadline {
        Deadline::after(Duration::from_secs(5))
    }

    pub fn ids(users: &[UserProfile]) -> Vec<String> {
        users.iter().map(|u| u.user_id.to_string()).collect()
    }

    pub fn in_memory(config: MatchmakerConfig, profiles: Vec<UserProfile>) -> InMemoryMatchmaker {
        let ledger = Arc::new(InMemorySwipeLedger::new());
        let index = Arc::new(InMemoryDiscoveryIndex::with_profiles(profiles));
        InMemoryMatchmaker {
            recorder: SwipeRecorder::new(ledger.clone(), config.clone()),
            discovery: DiscoveryService::new(ledger.clone(), index.clone(), config),
            ledger,
            index,
        }
    }

    pub fn community(config: MatchmakerConfig) -> InMemoryMatchmaker {
        Self::in_memory(config, TestFixtures::community())
    }

    pub fn is_user(id: &UserId, expected: &str) -> bool {
        id.as_str() == expected
    }
}
