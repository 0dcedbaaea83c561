//! Authentication middleware and extractors.
//!
//! The access-control gate, expressed as axum extractors so ordering is
//! fixed by construction: [`RequireAuth`] verifies the session token from
//! the request cookie and [`RequireAdmin`] composes it, then re-derives the
//! caller's role from the users table. A protected handler cannot run
//! before its gate; the gate never mutates persistent state.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use bistro_core::Role;

use crate::config::Environment;
use crate::db::UserRepository;
use crate::error::AppError;
use crate::models::CurrentUser;
use crate::services::tokens;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "token";

/// Build the session cookie carrying a signed token.
///
/// Production serves the frontend from a different origin, so the cookie is
/// `SameSite=None; Secure`; development keeps `SameSite=Strict` over plain
/// HTTP. Always http-only.
#[must_use]
pub fn session_cookie(token: String, environment: Environment) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    if environment.is_production() {
        cookie.set_same_site(SameSite::None);
        cookie.set_secure(true);
    } else {
        cookie.set_same_site(SameSite::Strict);
        cookie.set_secure(false);
    }
    cookie
}

/// Extractor that requires a valid session token.
///
/// Fails with 401 Unauthorized when the cookie is missing or its token does
/// not pass signature/expiry validation.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| AppError::Unauthorized("missing session token".to_string()))?;

        let claims = tokens::verify(&token, &state.config().token_secret)
            .map_err(|e| AppError::Unauthorized(format!("invalid session token: {e}")))?;

        Ok(Self(CurrentUser {
            email: claims.email,
        }))
    }
}

/// Extractor that requires an authenticated caller with the admin role.
///
/// Runs [`RequireAuth`] first, then looks the caller's email up in the
/// users table. The lookup happens on every request — no caching — so a
/// role change takes effect on the very next call. Fails with 403 Forbidden
/// when the caller has no record or a non-admin role.
pub struct RequireAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAuth(user) = RequireAuth::from_request_parts(parts, state).await?;

        let role = UserRepository::new(state.pool())
            .role_for(&user.email)
            .await?;

        match role {
            Some(Role::Admin) => Ok(Self(user)),
            _ => Err(AppError::Forbidden(format!(
                "{} does not hold the admin role",
                user.email
            ))),
        }
    }
}
