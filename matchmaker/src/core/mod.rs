//! Core matching logic
//!
//! Pure query composition plus the two request orchestrators. Nothing in
//! here holds state between requests; all state lives behind the store
//! traits.

pub mod deadline;
pub mod detector;
pub mod discovery;
pub mod query;
pub mod recorder;

pub use deadline::Deadline;
pub use detector::MatchDetector;
pub use discovery::DiscoveryService;
pub use query::{build_query, CandidateQuery, Clause, ProfileField};
pub use recorder::SwipeRecorder;
