//! Service trait definitions for dependency injection
//!
//! Identity verification and secret loading sit behind these traits so the
//! router can be exercised with mocks.

use shared::UserId;

use crate::error::WebServerResult;

/// Turns a bearer token into a verified user id
#[mockall::automock]
pub trait IdentityVerifier: Send + Sync {
    /// Verify `token` and return the user id it was issued for
    ///
    /// Any failure (bad signature, expired, missing or invalid claim) is
    /// `WebServerError::Unauthorized`.
    fn verify(&self, token: &str) -> WebServerResult<UserId>;
}

/// Where the token signing key comes from
#[mockall::automock]
pub trait SigningKeySource: Send + Sync {
    fn signing_key(&self) -> WebServerResult<String>;
}
