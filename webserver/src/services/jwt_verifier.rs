//! HS256 bearer token verification
//!
//! Tokens carry the acting user in a `userId` claim and must carry `exp`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use shared::{component_debug, UserId};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::IdentityVerifier;

const COMPONENT: &str = "identity";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    exp: i64,
}

pub struct JwtIdentityVerifier {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    pub fn new(signing_key: &str) -> WebServerResult<Self> {
        if signing_key.trim().is_empty() {
            return Err(WebServerError::config("token signing key is empty"));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding: DecodingKey::from_secret(signing_key.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        })
    }

    /// Mint a token for `user_id` valid for `ttl`
    pub fn issue(&self, user_id: &UserId, ttl: Duration) -> WebServerResult<String> {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| WebServerError::config(format!("token encoding failed: {e}")))
    }
}

impl IdentityVerifier for JwtIdentityVerifier {
    fn verify(&self, token: &str) -> WebServerResult<UserId> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            component_debug!(COMPONENT, "Token rejected: {}", e);
            WebServerError::unauthorized("invalid token")
        })?;

        UserId::parse(data.claims.user_id).map_err(|_| WebServerError::unauthorized("invalid userId claim"))
    }
}
