use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use shared::UserId;

use crate::error::WebServerError;
use crate::services::JwtIdentityVerifier;
use crate::traits::IdentityVerifier;

const KEY: &str = "test-signing-key";

fn alice() -> UserId {
    UserId::parse("alice").unwrap()
}

fn raw_token(claims: serde_json::Value, key: &str) -> String {
    encode(&Header::default(), &claims, &EncodingKey::from_secret(key.as_bytes())).unwrap()
}

#[test]
fn test_empty_key_is_rejected() {
    assert!(matches!(JwtIdentityVerifier::new("  "), Err(WebServerError::Config(_))));
}

#[test]
fn test_issued_token_verifies() {
    let verifier = JwtIdentityVerifier::new(KEY).unwrap();
    let token = verifier.issue(&alice(), Duration::minutes(5)).unwrap();

    assert_eq!(verifier.verify(&token).unwrap(), alice());
}

#[test]
fn test_foreign_signature_is_unauthorized() {
    let other = JwtIdentityVerifier::new("another-key").unwrap();
    let token = other.issue(&alice(), Duration::minutes(5)).unwrap();

    let verifier = JwtIdentityVerifier::new(KEY).unwrap();
    assert!(matches!(verifier.verify(&token), Err(WebServerError::Unauthorized { .. })));
}

#[test]
fn test_expired_token_is_unauthorized() {
    let verifier = JwtIdentityVerifier::new(KEY).unwrap();
    let exp = (Utc::now() - Duration::hours(1)).timestamp();
    let token = raw_token(json!({ "userId": "alice", "exp": exp }), KEY);

    assert!(matches!(verifier.verify(&token), Err(WebServerError::Unauthorized { .. })));
}

#[test]
fn test_missing_or_blank_user_claim_is_unauthorized() {
    let verifier = JwtIdentityVerifier::new(KEY).unwrap();
    let exp = (Utc::now() + Duration::hours(1)).timestamp();

    let no_claim = raw_token(json!({ "sub": "alice", "exp": exp }), KEY);
    assert!(matches!(verifier.verify(&no_claim), Err(WebServerError::Unauthorized { .. })));

    let blank = raw_token(json!({ "userId": "", "exp": exp }), KEY);
    assert!(matches!(verifier.verify(&blank), Err(WebServerError::Unauthorized { .. })));
}

#[test]
fn test_garbage_is_unauthorized() {
    let verifier = JwtIdentityVerifier::new(KEY).unwrap();
    assert!(verifier.verify("not.a.jwt").is_err());
    assert!(verifier.verify("").is_err());
}
