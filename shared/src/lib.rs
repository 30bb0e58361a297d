//! Shared types for the swipe matching service
//!
//! Contains the domain vocabulary (identifiers, swipe decisions, profiles,
//! discovery filters), the HTTP payloads, and the logging bootstrap used by
//! both the matchmaker core and the webserver.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{DiscoverRequest, DiscoverResponse, ProfileUpdate, SwipeRequest, SwipeResponse};
