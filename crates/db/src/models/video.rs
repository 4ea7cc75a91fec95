//! Video entity, its 1:1 metadata, and the publish DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vidcat_core::types::{DbId, Timestamp};

/// Descriptive metadata joined from the `video_metadata` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct VideoMetadata {
    pub genre: String,
    pub synopsis: Option<String>,
    pub release_year: Option<i32>,
    pub running_time: Option<i32>,
}

/// A row from `videos` joined with its metadata.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub director: String,
    #[serde(rename = "cast")]
    pub cast_members: Vec<String>,
    pub file_url: Option<String>,
    pub file_size: Option<i64>,
    pub format: Option<String>,
    pub resolution: Option<i32>,
    pub duration: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub metadata: VideoMetadata,
}

/// Metadata supplied when publishing a video.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoMetadata {
    #[validate(length(min = 1, max = 100))]
    pub genre: String,
    pub synopsis: Option<String>,
    #[validate(range(min = 1870, max = 2200))]
    pub release_year: Option<i32>,
    #[validate(range(min = 0))]
    pub running_time: Option<i32>,
}

/// DTO for publishing a new video.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideo {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub director: String,
    #[serde(default)]
    pub cast: Vec<String>,
    pub file_url: Option<String>,
    #[validate(range(min = 0))]
    pub file_size: Option<i64>,
    pub format: Option<String>,
    #[validate(range(min = 1))]
    pub resolution: Option<i32>,
    #[validate(range(min = 0))]
    pub duration: Option<i32>,
    #[validate(nested)]
    pub metadata: CreateVideoMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> CreateVideo {
        CreateVideo {
            title: title.to_string(),
            director: "John Doe".to_string(),
            cast: vec!["Jane Doe".to_string()],
            file_url: Some("http://example.com/video.mp4".to_string()),
            file_size: Some(5_000_000),
            format: Some("mp4".to_string()),
            resolution: Some(1080),
            duration: Some(3600),
            metadata: CreateVideoMetadata {
                genre: "Action".to_string(),
                synopsis: None,
                release_year: Some(2024),
                running_time: Some(120),
            },
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("Test Video").validate().is_ok());
    }

    #[test]
    fn empty_title_fails() {
        assert!(request("").validate().is_err());
    }

    #[test]
    fn nested_metadata_is_validated() {
        let mut input = request("Test Video");
        input.metadata.genre = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn cast_defaults_to_empty() {
        let input: CreateVideo = serde_json::from_value(serde_json::json!({
            "title": "Solo",
            "director": "Someone",
            "metadata": { "genre": "Drama" }
        }))
        .unwrap();
        assert!(input.cast.is_empty());
        assert!(input.file_url.is_none());
    }
}
