//! Session route handlers: token issuance and logout.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bistro_core::Email;

use crate::error::{AppError, Result};
use crate::middleware::auth::session_cookie;
use crate::services::tokens::{self, SessionClaims};
use crate::state::AppState;

/// Identity payload posted at login.
///
/// Extra fields are accepted and ignored; only the email is signed into the
/// token.
#[derive(Debug, Deserialize)]
pub struct IdentityPayload {
    pub email: Email,
}

/// Body returned by both session endpoints.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// Issue a session token for the posted identity and set the cookie.
#[instrument(skip(state, jar), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<IdentityPayload>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let claims = SessionClaims::new(payload.email);
    let token = tokens::issue(&claims, &state.config().token_secret)
        .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

    let cookie = session_cookie(token, state.config().environment);

    Ok((jar.add(cookie), Json(SessionResponse { success: true })))
}

/// Clear the session cookie.
///
/// Client-side invalidation only: the token itself stays cryptographically
/// valid until expiry, there is no server-side revocation list.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let cookie = session_cookie(String::new(), state.config().environment);

    (jar.remove(cookie), Json(SessionResponse { success: true }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_payload_ignores_extra_fields() {
        let payload: IdentityPayload =
            serde_json::from_str(r#"{"email":"a@x.com","displayName":"A"}"#).unwrap();
        assert_eq!(payload.email.as_str(), "a@x.com");
    }

    #[test]
    fn test_identity_payload_requires_email() {
        assert!(serde_json::from_str::<IdentityPayload>("{}").is_err());
    }

    #[test]
    fn test_session_response_shape() {
        let json = serde_json::to_string(&SessionResponse { success: true }).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
