//! Signing key loaded from the environment
//!
//! A `.env` file in the working directory (or a parent) is read first;
//! variables already set in the process environment win.

use crate::error::{WebServerError, WebServerResult};
use crate::traits::SigningKeySource;

pub const JWT_KEY_VAR: &str = "JWT_KEY";

pub struct RealSigningKeySource {
    var: String,
}

impl RealSigningKeySource {
    pub fn new() -> Self {
        Self::from_var(JWT_KEY_VAR)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    fn init_env() {
        // A missing .env file is not an error
        let _ = dotenv::dotenv();
    }
}

impl Default for RealSigningKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SigningKeySource for RealSigningKeySource {
    fn signing_key(&self) -> WebServerResult<String> {
        Self::init_env();
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) => Err(WebServerError::config(format!("{} is empty", self.var))),
            Err(_) => Err(WebServerError::config(format!("{} is not set", self.var))),
        }
    }
}
