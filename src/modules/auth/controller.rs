use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::{AuthUser, SESSION_COOKIE};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{IdentityResponse, LoginDto, RegisterDto, User};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Return the identity behind the session cookie
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Authenticated identity", body = IdentityResponse),
        (status = 401, description = "Missing or invalid session cookie", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("session_cookie" = []))
)]
#[instrument(skip_all)]
pub async fn whoami(auth_user: AuthUser) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        email: auth_user.email().to_string(),
        username: auth_user.username().to_string(),
    })
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 400, description = "Validation error or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = AuthService::register(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive a session cookie
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = String),
        (status = 401, description = "Password is incorrect", body = ErrorResponse),
        (status = 404, description = "User not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<(CookieJar, Json<&'static str>), AppError> {
    let token = AuthService::login(&state.db, dto, &state.jwt_config).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json("Success")))
}
