use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::auth::SESSION_COOKIE;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{IdentityResponse, LoginDto, RegisterDto, User};
use crate::modules::posts::controller::ValidationErrorResponse;
use crate::modules::posts::model::{
    CreatePostDto, GeolocationParams, Post, PostStatus, StatusCount, UpdatePostDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::whoami,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::get_posts,
        crate::modules::posts::controller::get_post_by_id,
        crate::modules::posts::controller::edit_post,
        crate::modules::posts::controller::delete_post,
        crate::modules::posts::controller::status_count,
        crate::modules::posts::controller::find_by_location,
    ),
    components(
        schemas(
            User,
            RegisterDto,
            LoginDto,
            IdentityResponse,
            Post,
            PostStatus,
            CreatePostDto,
            UpdatePostDto,
            StatusCount,
            GeolocationParams,
            ErrorResponse,
            ValidationErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and session identity"),
        (name = "Posts", description = "Post CRUD, aggregation, and geolocation lookup")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
            );
        }
    }
}
