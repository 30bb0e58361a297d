//! HTTP payloads exchanged between clients and the webserver
//!
//! - `swipe`: recording a like / dislike
//! - `discover`: requesting a filtered candidate list
//! - `profile`: publishing the caller's search projection

pub mod discover;
pub mod profile;
pub mod swipe;

pub use discover::{DiscoverRequest, DiscoverResponse};
pub use profile::ProfileUpdate;
pub use swipe::{SwipeRequest, SwipeResponse};
