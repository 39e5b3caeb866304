use postboard::config::cors::CorsConfig;
use postboard::config::jwt::JwtConfig;
use postboard::modules::posts::model::PostStatus;
use postboard::router::init_router;
use postboard::state::AppState;
use postboard::utils::jwt::create_session_token;
use postboard::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 86400,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("user-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, username: &str, email: &str, password: &str) -> Uuid {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(hashed)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_post(
    pool: &PgPool,
    title: &str,
    status: PostStatus,
    location: [f64; 2],
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO posts (title, body, createdby, status, location)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(title)
    .bind("Some body")
    .bind("tester")
    .bind(status)
    .bind(location.to_vec())
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Cookie header value for an already-authenticated test user.
#[allow(dead_code)]
pub fn session_cookie(user_id: Uuid, email: &str, username: &str) -> String {
    let token = create_session_token(user_id, email, username, &test_jwt_config()).unwrap();
    format!("token={token}")
}
