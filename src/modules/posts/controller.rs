use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::{ValidatedId, ValidatedJson};

use super::model::{CreatePostDto, GeolocationParams, Post, StatusCount, UpdatePostDto};
use super::service::PostService;

#[derive(ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Create a post
#[utoipa::path(
    post,
    path = "/create",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = String),
        (status = 400, description = "Validation errors", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid session cookie", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("session_cookie" = []))
)]
#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<(StatusCode, Json<&'static str>), AppError> {
    PostService::create_post(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json("Success")))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/getposts",
    responses(
        (status = 200, description = "All posts", body = Vec<Post>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostService::get_posts(&state.db).await?;
    Ok(Json(posts))
}

/// Fetch a post by id; `null` when it does not exist
#[utoipa::path(
    get,
    path = "/getpostbyid/{id}",
    params(("id" = uuid::Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post, or null", body = Option<Post>),
        (status = 400, description = "Invalid post ID", body = ValidationErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    ValidatedId(id): ValidatedId,
) -> Result<Json<Option<Post>>, AppError> {
    let post = PostService::get_post_by_id(&state.db, id).await?;
    Ok(Json(post))
}

/// Edit a post's title and body
#[utoipa::path(
    put,
    path = "/editpost/{id}",
    params(("id" = uuid::Uuid, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = String),
        (status = 400, description = "Validation errors", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid session cookie", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("session_cookie" = []))
)]
#[instrument(skip_all)]
pub async fn edit_post(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedId(id): ValidatedId,
    ValidatedJson(dto): ValidatedJson<UpdatePostDto>,
) -> Result<Json<&'static str>, AppError> {
    PostService::update_post(&state.db, id, dto).await?;
    Ok(Json("Success"))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/deletepost/{id}",
    params(("id" = uuid::Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = String),
        (status = 400, description = "Invalid post ID", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid session cookie", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("session_cookie" = []))
)]
#[instrument(skip_all)]
pub async fn delete_post(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedId(id): ValidatedId,
) -> Result<Json<&'static str>, AppError> {
    PostService::delete_post(&state.db, id).await?;
    Ok(Json("Success"))
}

/// Count posts grouped by status
#[utoipa::path(
    get,
    path = "/statuscount",
    responses(
        (status = 200, description = "Counts per status", body = Vec<StatusCount>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn status_count(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCount>>, AppError> {
    let counts = PostService::status_counts(&state.db).await?;
    Ok(Json(counts))
}

/// Find the post stored at an exact `[latitude, longitude]` pair
#[utoipa::path(
    get,
    path = "/geolocation",
    params(GeolocationParams),
    responses(
        (status = 200, description = "Matching post", body = Post),
        (status = 400, description = "Missing or out-of-range coordinates", body = ErrorResponse),
        (status = 404, description = "No post found at the given location", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn find_by_location(
    State(state): State<AppState>,
    Query(params): Query<GeolocationParams>,
) -> Result<Json<Post>, AppError> {
    let (Some(latitude), Some(longitude)) = (params.latitude, params.longitude) else {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Latitude and longitude are required"
        )));
    };

    // Unparseable values fall through the range checks as NaN.
    let latitude: f64 = latitude.parse().unwrap_or(f64::NAN);
    let longitude: f64 = longitude.parse().unwrap_or(f64::NAN);

    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Latitude must be a number between -90 and 90"
        )));
    }

    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Longitude must be a number between -180 and 180"
        )));
    }

    let post = PostService::find_by_location(&state.db, latitude, longitude)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No post found at the given location")))?;

    Ok(Json(post))
}
