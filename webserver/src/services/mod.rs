//! Service implementations

pub mod jwt_verifier;
pub mod signing_key;

#[cfg(test)]
mod tests;

pub use jwt_verifier::JwtIdentityVerifier;
pub use signing_key::{RealSigningKeySource, JWT_KEY_VAR};
