use crate::error::ApiError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long a minted token stays valid.
const TOKEN_TTL_HOURS: i64 = 24;

/// The claims encoded within an access token.
#[derive(Debug, Serialize, Deserialize, Clone)] // Clone: the middleware stores a copy in request extensions
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
}

/// The signing key material, built once from configuration.
///
/// Holding the encoding and decoding halves together keeps every token
/// operation a pure function of its arguments; nothing in this module reads
/// the environment.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Mints a signed token for a user id, valid for 24 hours from now.
///
/// # Errors
/// Returns `ApiError::Internal` if encoding fails; signing never fails for a
/// well-formed key, so this is effectively unreachable in practice.
pub fn generate_token(user_id: i32, keys: &TokenKeys) -> Result<String, ApiError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(&Header::default(), &claims, &keys.encoding)
        .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a token string and decodes its claims.
///
/// Default validation applies: the signature must match and `exp` must be in
/// the future.
///
/// # Errors
/// Returns `ApiError::InvalidToken` for a malformed token, a signature
/// mismatch, or an expired validity window.
pub fn verify_token(token: &str, keys: &TokenKeys) -> Result<Claims, ApiError> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> TokenKeys {
        TokenKeys::from_secret(b"token-test-secret")
    }

    #[test]
    fn test_token_generation_and_verification() {
        let keys = test_keys();
        let user_id = 1;

        let token = generate_token(user_id, &keys).unwrap();
        let claims = verify_token(&token, &keys).unwrap();

        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = test_keys();

        // Two hours in the past clears the default validation leeway.
        let issued = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(3))
            .expect("valid timestamp")
            .timestamp() as usize;
        let expired = Claims {
            sub: 2,
            exp: issued + 60 * 60,
            iat: issued,
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(b"token-test-secret"),
        )
        .unwrap();

        match verify_token(&token, &keys) {
            Err(ApiError::InvalidToken) => {}
            Ok(_) => panic!("token should have been rejected as expired"),
            Err(e) => panic!("unexpected error type: {:?}", e),
        }
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let keys = test_keys();
        let other_keys = TokenKeys::from_secret(b"a-completely-different-secret");

        let token = generate_token(3, &other_keys).unwrap();

        match verify_token(&token, &keys) {
            Err(ApiError::InvalidToken) => {}
            Ok(_) => panic!("token should have been rejected: signature mismatch"),
            Err(e) => panic!("unexpected error type: {:?}", e),
        }
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let keys = test_keys();

        match verify_token("not-a-jwt-at-all", &keys) {
            Err(ApiError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }
}
