//! Service-specific tests

mod jwt_verifier;
mod signing_key;
