/// Session token issuance and validation.
///
/// Tokens are HS256-signed JWTs carrying the username, an expiry 24 hours
/// after issuance, and a per-issue token id. The signing secret is fixed for
/// the process lifetime; the service is constructed once from configuration
/// and injected wherever tokens are issued or checked.
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

const TOKEN_EXPIRY_HOURS: i64 = 24;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Decoded token content.
///
/// Token validity is a function of the signature and `exp` alone (plus
/// revocation state, which lives outside this module); `jti` only makes
/// repeated issuances for the same username distinct strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
    pub jti: String,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        // The crate default of 60s leeway would accept just-expired tokens;
        // expiry must be strictly in the future.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a signed token for `username`, expiring 24 hours from now.
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let claims = Claims {
            username: username.to_string(),
            exp: (Utc::now() + Duration::hours(TOKEN_EXPIRY_HOURS)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
    }

    /// Validate a token and return its claims.
    ///
    /// The signature is verified before the expiry is considered, so a
    /// forged token is always `InvalidSignature`, never `Expired`. A token
    /// signed under a different algorithm is rejected as `InvalidSignature`.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AppError::InvalidSignature
                }
                _ => AppError::Malformed,
            })
    }
}
