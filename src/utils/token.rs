use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fallback expiry when the caller does not supply one. The sign-in path
/// always passes the configured TTL explicitly.
const DEFAULT_TTL_MINUTES: i64 = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Signs an HS256 access token binding `subject` to an absolute expiry.
pub fn create_access_token(
    subject: &str,
    expires_in: Option<Duration>,
    secret: &str,
) -> Result<String> {
    let ttl = expires_in.unwrap_or_else(|| Duration::minutes(DEFAULT_TTL_MINUTES));
    let expire = Utc::now() + ttl;
    let claims = Claims {
        sub: subject.to_string(),
        exp: expire.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign access token: {}", e)))
}

/// Verifies signature and expiry; a missing `sub` claim also fails decode.
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Invalid authentication credentials".to_string()))
}
