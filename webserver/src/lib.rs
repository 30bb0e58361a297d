//! HTTP surface for the swipe matching service
//!
//! Verifies the caller's bearer token, then hands swipes, discovery
//! requests and profile updates to the matchmaker core.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{IdentityVerifier, MockIdentityVerifier, MockSigningKeySource, SigningKeySource};

// Re-export service implementations
pub use services::{JwtIdentityVerifier, RealSigningKeySource};
