use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Claims carried by an access token.
///
/// `is_admin` is a 0/1 integer: set to 1 exactly when the user's admin flag
/// is true at issuance time. Guards still re-check live user state, so a
/// stale flag only survives until the token expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: the user id, stringified
    pub sub: String,
    /// The user id
    pub id: i64,
    pub is_admin: u8,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and validates signed access tokens.
///
/// Secret, algorithm, and time-to-live are all injected from configuration;
/// none has a default.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (at least 32 bytes for the HS family)
    /// * `algorithm` - Signing algorithm, parsed from configuration
    /// * `ttl` - Lifetime stamped into each issued token
    pub fn new(secret: &[u8], algorithm: Algorithm, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            ttl,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, user_id: i64, is_admin: bool) -> Result<String, TokenError> {
        let claims = AccessClaims {
            sub: user_id.to_string(),
            id: user_id,
            is_admin: if is_admin { 1 } else { 0 },
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// The returned id is not yet resolved against a live user record; that
    /// is the caller's job.
    ///
    /// # Errors
    /// * `Expired` - The exp claim has passed
    /// * `Invalid` - Bad signature, malformed structure, or missing claims
    pub fn validate(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_ttl(ttl: Duration) -> TokenService {
        TokenService::new(
            b"test_secret_key_at_least_32_bytes!",
            Algorithm::HS256,
            ttl,
        )
    }

    #[test]
    fn test_issue_and_validate() {
        let tokens = service_with_ttl(Duration::minutes(30));

        let token = tokens.issue(42, false).expect("Failed to issue token");
        let claims = tokens.validate(&token).expect("Failed to validate token");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.is_admin, 0);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_admin_flag_is_coerced_to_integer() {
        let tokens = service_with_ttl(Duration::minutes(30));

        let admin_token = tokens.issue(1, true).unwrap();
        assert_eq!(tokens.validate(&admin_token).unwrap().is_admin, 1);

        let plain_token = tokens.issue(2, false).unwrap();
        assert_eq!(tokens.validate(&plain_token).unwrap().is_admin, 0);
    }

    #[test]
    fn test_expired_token() {
        // Stamped with an exp already in the past
        let tokens = service_with_ttl(Duration::minutes(-5));

        let token = tokens.issue(42, false).unwrap();
        let result = tokens.validate(&token);

        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let tokens = service_with_ttl(Duration::minutes(30));

        let result = tokens.validate("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuing = TokenService::new(
            b"secret_one_at_least_32_bytes_long!!",
            Algorithm::HS256,
            Duration::minutes(30),
        );
        let validating = TokenService::new(
            b"secret_two_at_least_32_bytes_long!!",
            Algorithm::HS256,
            Duration::minutes(30),
        );

        let token = issuing.issue(42, false).unwrap();
        let result = validating.validate(&token);

        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_missing_id_claim_is_invalid() {
        #[derive(Serialize)]
        struct NoIdClaims {
            sub: String,
            exp: i64,
        }

        let secret = b"test_secret_key_at_least_32_bytes!";
        let tokens = TokenService::new(secret, Algorithm::HS256, Duration::minutes(30));

        let claims = NoIdClaims {
            sub: "42".to_string(),
            exp: (Utc::now() + Duration::minutes(30)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        let result = tokens.validate(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
