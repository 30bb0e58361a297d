//! Matchmaker library: swipe ledger, match detection and discovery
//!
//! Records like / dislike decisions, detects the moment two users have
//! liked each other, and composes exclusion-aware candidate queries against
//! a discovery index. Storage is reached only through the [`SwipeStore`] and
//! [`DiscoveryIndex`] traits.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{MatchConsistency, MatchmakerConfig};
pub use crate::core::{build_query, CandidateQuery, Clause, Deadline, DiscoveryService, MatchDetector, ProfileField, SwipeRecorder};
pub use error::{MatchmakerError, MatchmakerResult, StoreError, StoreResult};
pub use traits::{DiscoveryIndex, LikeOutcome, MockDiscoveryIndex, MockSwipeStore, SwipeStore};
