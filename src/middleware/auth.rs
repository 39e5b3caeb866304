use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Extractor that validates the session cookie and provides the
/// authenticated user's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("The token is missing")))?;

        let claims = verify_token(&token, &state.jwt_config)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("The token is wrong")))?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claims() -> Claims {
        Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            username: "tester".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_auth_user_accessors() {
        let auth_user = AuthUser(create_test_claims());

        assert_eq!(auth_user.email(), "test@example.com");
        assert_eq!(auth_user.username(), "tester");
    }
}
