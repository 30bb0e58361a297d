//! Service implementations
//!
//! Concrete collaborators behind the store traits: an in-process swipe
//! ledger, an in-process discovery index, and an HTTP client for an
//! Elasticsearch-compatible index.

pub mod elasticsearch;
pub mod memory_index;
pub mod swipe_ledger;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use elasticsearch::{ElasticsearchIndex, DEFAULT_INDEX};
pub use memory_index::InMemoryDiscoveryIndex;
pub use swipe_ledger::InMemorySwipeLedger;
