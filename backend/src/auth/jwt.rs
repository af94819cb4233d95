//! JWT verification with a pre-computed decoding key

use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token type: only "access" tokens authenticate requests
    pub token_type: String,
    /// `PRIVATE` or `BUSINESS`; private when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| anyhow!("Invalid user ID in token"))
    }
}

/// Verifies HS256 access tokens.
///
/// The decoding key is derived once at startup and shared behind an `Arc`.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation: Arc::new(Validation::default()),
        }
    }

    /// Decode and check signature and expiry
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| anyhow!("Invalid token: {}", e))?;
        Ok(data.claims)
    }

    /// Verify and require `token_type == "access"`
    pub fn verify_access(&self, token: &str) -> Result<Claims> {
        let claims = self.verify(token)?;
        if claims.token_type != "access" {
            return Err(anyhow!("Not an access token"));
        }
        Ok(claims)
    }
}
