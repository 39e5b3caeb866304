use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginDto, RegisterDto, User};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, username, email, created_at",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("Email already exists"));
            }
            AppError::from(e)
        })?;

        Ok(user)
    }

    /// Verifies credentials and issues a session token.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            username: String,
            email: String,
            password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, email, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not exist")))?;

        let is_valid = verify_password(&dto.password, &user.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Password is incorrect"
            )));
        }

        create_session_token(user.id, &user.email, &user.username, jwt_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::verify_token;
    use axum::http::StatusCode;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry: 86400,
        }
    }

    fn register_dto(email: &str) -> RegisterDto {
        RegisterDto {
            username: "tester".to_string(),
            email: email.to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_stores_hashed_password(pool: PgPool) {
        let email = format!("{}@test.com", Uuid::new_v4());
        let user = AuthService::register(&pool, register_dto(&email))
            .await
            .unwrap();

        assert_eq!(user.email, email);
        assert_eq!(user.username, "tester");

        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_ne!(stored, "hunter2hunter2");
        assert!(verify_password("hunter2hunter2", &stored).unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_duplicate_email(pool: PgPool) {
        let email = format!("{}@test.com", Uuid::new_v4());

        AuthService::register(&pool, register_dto(&email))
            .await
            .unwrap();

        let result = AuthService::register(&pool, register_dto(&email)).await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Email already exists");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_issues_verifiable_token(pool: PgPool) {
        let email = format!("{}@test.com", Uuid::new_v4());
        let jwt_config = test_jwt_config();

        AuthService::register(&pool, register_dto(&email))
            .await
            .unwrap();

        let token = AuthService::login(
            &pool,
            LoginDto {
                email: email.clone(),
                password: "hunter2hunter2".to_string(),
            },
            &jwt_config,
        )
        .await
        .unwrap();

        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.email, email);
        assert_eq!(claims.username, "tester");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_wrong_password(pool: PgPool) {
        let email = format!("{}@test.com", Uuid::new_v4());

        AuthService::register(&pool, register_dto(&email))
            .await
            .unwrap();

        let result = AuthService::login(
            &pool,
            LoginDto {
                email,
                password: "wrongpassword".to_string(),
            },
            &test_jwt_config(),
        )
        .await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "Password is incorrect");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_unknown_user(pool: PgPool) {
        let result = AuthService::login(
            &pool,
            LoginDto {
                email: format!("{}@test.com", Uuid::new_v4()),
                password: "whatever".to_string(),
            },
            &test_jwt_config(),
        )
        .await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "User not exist");
    }
}
