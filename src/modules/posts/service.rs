use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreatePostDto, Post, StatusCount, UpdatePostDto};

const POST_COLUMNS: &str = "id, title, body, createdby, status, location, created_at, updated_at";

pub struct PostService;

impl PostService {
    #[instrument(skip(db))]
    pub async fn create_post(db: &PgPool, dto: CreatePostDto) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "INSERT INTO posts (title, body, createdby, status, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.body)
        .bind(&dto.createdby)
        .bind(dto.status)
        .bind(&dto.location)
        .fetch_one(db)
        .await?;

        Ok(post)
    }

    #[instrument(skip(db))]
    pub async fn get_posts(db: &PgPool) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(posts)
    }

    #[instrument(skip(db))]
    pub async fn get_post_by_id(db: &PgPool, post_id: Uuid) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(post_id)
        .fetch_optional(db)
        .await?;

        Ok(post)
    }

    /// Partial update of `title` and `body`; fields left out keep their
    /// stored values.
    #[instrument(skip(db))]
    pub async fn update_post(
        db: &PgPool,
        post_id: Uuid,
        dto: UpdatePostDto,
    ) -> Result<Post, AppError> {
        let existing = Self::get_post_by_id(db, post_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Post not found")))?;

        let title = dto.title.unwrap_or(existing.title);
        let body = dto.body.unwrap_or(existing.body);

        let post = sqlx::query_as::<_, Post>(&format!(
            "UPDATE posts
             SET title = $1, body = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&title)
        .bind(&body)
        .bind(post_id)
        .fetch_one(db)
        .await?;

        Ok(post)
    }

    #[instrument(skip(db))]
    pub async fn delete_post(db: &PgPool, post_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Post not found")));
        }

        Ok(())
    }

    /// Number of posts per status, one row per status present in the table.
    #[instrument(skip(db))]
    pub async fn status_counts(db: &PgPool) -> Result<Vec<StatusCount>, AppError> {
        let counts = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM posts GROUP BY status",
        )
        .fetch_all(db)
        .await?;

        Ok(counts)
    }

    /// Exact-match lookup on the stored `[latitude, longitude]` pair.
    #[instrument(skip(db))]
    pub async fn find_by_location(
        db: &PgPool,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE location = $1"
        ))
        .bind(vec![latitude, longitude])
        .fetch_optional(db)
        .await?;

        Ok(post)
    }
}
