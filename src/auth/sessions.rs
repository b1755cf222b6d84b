/**
 * Bearer Tokens
 *
 * JWT creation and verification for user sessions. The signing secret is
 * passed in from `AppConfig`; this module never reads the environment.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens are valid for exactly one hour from issuance.
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration (Unix timestamp)
    pub exp: u64,
}

/// Create a signed token for a user.
///
/// # Arguments
/// * `secret` - process-wide signing key
/// * `user_id` - id embedded as the `sub` claim
///
/// # Returns
/// Encoded JWT string
pub fn create_token(secret: &str, user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp() as u64;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token and return its claims.
///
/// Fails when the signature is invalid, the payload is malformed, or the
/// expiration has passed.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    // No expiry leeway: the one-hour window is exact.
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn encode_claims(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_and_verify_roundtrip() {
        let user_id = uuid::Uuid::new_v4().to_string();
        let token = create_token(SECRET, &user_id).unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = create_token(SECRET, "some-user").unwrap();
        assert!(verify_token("a-different-secret", &token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify_token(SECRET, "not.a.token").is_err());
        assert!(verify_token(SECRET, "").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Issued 61 minutes ago with the one-hour TTL: expired.
        let iat = Utc::now().timestamp() as u64 - 61 * 60;
        let token = encode_claims(&Claims {
            sub: "expired-user".to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        });

        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn test_verify_accepts_token_within_window() {
        // Issued 59 minutes ago: still inside the one-hour window.
        let iat = Utc::now().timestamp() as u64 - 59 * 60;
        let token = encode_claims(&Claims {
            sub: "fresh-user".to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        });

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "fresh-user");
    }
}
