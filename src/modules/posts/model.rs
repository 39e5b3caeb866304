use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Active,
    Deactive,
}

/// A post. `location` is an ordered `[latitude, longitude]` pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub createdby: String,
    pub status: PostStatus,
    pub location: Vec<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_location(location: &[f64]) -> Result<(), ValidationError> {
    if location.len() != 2 || !location.iter().all(|n| n.is_finite()) {
        let mut err = ValidationError::new("location");
        err.message =
            Some("Location must be an array of two numbers [latitude, longitude]".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    #[validate(length(min = 1, message = "Created By is required"))]
    pub createdby: String,
    pub status: PostStatus,
    #[validate(custom(function = validate_location))]
    pub location: Vec<f64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostDto {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: Option<String>,
}

/// One aggregation group of `/statuscount`. Serialized with an `_id` key,
/// which existing clients depend on.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StatusCount {
    #[serde(rename = "_id")]
    pub status: PostStatus,
    pub count: i64,
}

/// Raw query parameters of `/geolocation`; values are parsed to floats in
/// the handler so a malformed number reports the same message as an
/// out-of-range one.
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct GeolocationParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreatePostDto {
        CreatePostDto {
            title: "A title".to_string(),
            body: "A body".to_string(),
            createdby: "tester".to_string(),
            status: PostStatus::Active,
            location: vec![6.52, 3.37],
        }
    }

    #[test]
    fn test_valid_create_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let dto = CreatePostDto {
            title: String::new(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_location_must_have_two_entries() {
        for location in [vec![], vec![6.52], vec![6.52, 3.37, 1.0]] {
            let dto = CreatePostDto {
                location,
                ..valid_dto()
            };
            let errors = dto.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("location"));
        }
    }

    #[test]
    fn test_location_rejects_non_finite() {
        let dto = CreatePostDto {
            location: vec![f64::NAN, 3.37],
            ..valid_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PostStatus::Deactive).unwrap(),
            "\"deactive\""
        );
    }
}
