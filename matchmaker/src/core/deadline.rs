//! Per-request deadline applied to every store call

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{MatchmakerError, MatchmakerResult, StoreResult};

/// Point in time by which a whole operation must have finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    pub fn after(budget: Duration) -> Self {
        Self(Instant::now() + budget)
    }

    pub fn instant(&self) -> Instant {
        self.0
    }

    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }

    /// Run one store call under this deadline
    ///
    /// Store failures become `Storage { operation }`, an elapsed deadline
    /// becomes `Timeout { operation }`. Nothing is retried.
    pub async fn run<T, F>(&self, operation: &'static str, call: F) -> MatchmakerResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match tokio::time::timeout_at(self.0, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(MatchmakerError::Storage { operation, source }),
            Err(_) => Err(MatchmakerError::Timeout { operation }),
        }
    }
}
