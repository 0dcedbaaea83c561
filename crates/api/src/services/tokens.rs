//! Session token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs: validity is determined purely by
//! signature and expiry, with no server-side session store or revocation
//! list. Logout therefore only clears the client cookie; an issued token
//! stays cryptographically valid until it expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bistro_core::Email;

/// Validity window for issued session tokens, in days.
pub const SESSION_TTL_DAYS: i64 = 365;

/// Errors from signing or validating a session token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing or validation failed (bad signature, expired, malformed).
    #[error("session token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Claims carried by a session token.
///
/// Deliberately minimal: the email identifies the caller, and privilege is
/// re-derived from the users table on every request rather than encoded
/// here, so a year-long token cannot outlive a demotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email the token was issued for.
    pub email: Email,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for an identity, expiring [`SESSION_TTL_DAYS`] from now.
    #[must_use]
    pub fn new(email: Email) -> Self {
        let now = Utc::now();
        Self {
            email,
            iat: now.timestamp(),
            exp: (now + Duration::days(SESSION_TTL_DAYS)).timestamp(),
        }
    }
}

/// Sign claims into a session token.
///
/// # Errors
///
/// Returns `TokenError` if signing fails.
pub fn issue(claims: &SessionClaims, secret: &SecretString) -> Result<String, TokenError> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )?;
    Ok(token)
}

/// Validate a session token's signature and expiry, returning its claims.
///
/// # Errors
///
/// Returns `TokenError` if the token is malformed, tampered with, or
/// expired.
pub fn verify(token: &str, secret: &SecretString) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn test_secret() -> SecretString {
        SecretString::from("kQ8vZ2mX4pL9sW1cR6tY3nB7dF5gH0jE")
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let secret = test_secret();
        let claims = SessionClaims::new(Email::parse("test@example.com").unwrap());

        let token = issue(&claims, &secret).unwrap();
        let decoded = verify(&token, &secret).unwrap();

        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_ttl_is_a_year() {
        let claims = SessionClaims::new(Email::parse("test@example.com").unwrap());
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let claims = SessionClaims::new(Email::parse("test@example.com").unwrap());
        let token = issue(&claims, &test_secret()).unwrap();

        let other = SecretString::from("aB3xY9mK2nL5pQ7rT0uW4zC6eD8fG1hJ");
        let err = verify(&token, &other).unwrap_err();
        let TokenError::Jwt(inner) = err;
        assert!(matches!(inner.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let secret = test_secret();
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            email: Email::parse("test@example.com").unwrap(),
            iat: now - 7200,
            // Past the validator's default leeway
            exp: now - 3600,
        };

        let token = issue(&claims, &secret).unwrap();
        let err = verify(&token, &secret).unwrap_err();
        let TokenError::Jwt(inner) = err;
        assert!(matches!(inner.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify("not-a-token", &test_secret()).is_err());
    }
}
