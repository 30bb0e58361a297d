//! Runtime policy for the matchmaker core

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How a like is checked for mutuality and persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchConsistency {
    /// Read the counterpart's decision, then write. Two concurrent likes
    /// from both sides can each miss the other and never match.
    CheckThenWrite,
    /// One conditional write keyed by the unordered pair decides the match
    #[default]
    PairConditional,
}

impl fmt::Display for MatchConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchConsistency::CheckThenWrite => write!(f, "check-then-write"),
            MatchConsistency::PairConditional => write!(f, "pair-conditional"),
        }
    }
}

impl FromStr for MatchConsistency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "check-then-write" | "reference" => Ok(MatchConsistency::CheckThenWrite),
            "pair-conditional" | "conditional" => Ok(MatchConsistency::PairConditional),
            _ => Err(format!("Unknown consistency mode: {s}")),
        }
    }
}

/// Core policy shared by the swipe recorder and discovery service
#[derive(Debug, Clone)]
pub struct MatchmakerConfig {
    /// Budget for a whole operation, all store calls included
    pub store_timeout: Duration,
    pub consistency: MatchConsistency,
    /// Permit `acting == target` swipes
    pub allow_self_swipe: bool,
    /// Add the requester to their own exclusion set
    pub exclude_self_from_discovery: bool,
    /// Result cap handed to the index with every query
    pub max_candidates: usize,
}

impl Default for MatchmakerConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(2),
            consistency: MatchConsistency::default(),
            allow_self_swipe: false,
            exclude_self_from_discovery: true,
            max_candidates: 50,
        }
    }
}

impl MatchmakerConfig {
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn with_consistency(mut self, consistency: MatchConsistency) -> Self {
        self.consistency = consistency;
        self
    }

    pub fn with_self_swipe(mut self, allowed: bool) -> Self {
        self.allow_self_swipe = allowed;
        self
    }

    pub fn with_self_exclusion(mut self, excluded: bool) -> Self {
        self.exclude_self_from_discovery = excluded;
        self
    }

    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }
}
