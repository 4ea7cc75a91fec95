//! In-memory stores for service and HTTP tests.
//!
//! Compiled for unit tests and behind the `test-util` feature.
//!
//! Mirrors the PostgreSQL semantics the services rely on (case-insensitive
//! title check, search over active videos by title and genre prefixes,
//! create-if-absent increments) and counts every write.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use vidcat_core::engagement::EngagementType;
use vidcat_core::types::DbId;
use vidcat_db::models::engagement::VideoEngagement;
use vidcat_db::models::video::{CreateVideo, Video, VideoMetadata};

use super::store::{EngagementStore, VideoStore};

#[derive(Default)]
struct Inner {
    videos: Vec<Video>,
    engagements: HashMap<DbId, VideoEngagement>,
    next_id: DbId,
}

/// Video and engagement store held in process memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    video_writes: AtomicUsize,
    engagement_writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a protocol error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes to the video store.
    pub fn video_writes(&self) -> usize {
        self.video_writes.load(Ordering::SeqCst)
    }

    /// Number of successful writes to the engagement store.
    pub fn engagement_writes(&self) -> usize {
        self.engagement_writes.load(Ordering::SeqCst)
    }

    /// Edit a stored video in place, bypassing the write counter.
    pub fn modify_video(&self, id: DbId, edit: impl FnOnce(&mut Video)) {
        if let Some(video) = self.lock().videos.iter_mut().find(|v| v.id == id) {
            edit(video);
        }
    }

    /// Seed counters for a video, bypassing the write counter.
    pub fn put_engagement(&self, video_id: DbId, impressions: i64, views: i64) {
        let now = Utc::now();
        self.lock().engagements.insert(
            video_id,
            VideoEngagement {
                video_id,
                impressions,
                views,
                created_at: now,
                updated_at: now,
            },
        );
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a test thread panicked mid-write.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> Result<(), sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("simulated write failure".into()));
        }
        Ok(())
    }
}

/// Words a video is searchable by.
fn search_words(video: &Video) -> Vec<String> {
    format!("{} {}", video.title, video.metadata.genre)
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prefix terms of a `"a:* & b:*"` tsquery.
fn tsquery_terms(tsquery: &str) -> Vec<String> {
    tsquery
        .split('&')
        .map(|t| t.trim().trim_end_matches(":*").to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn window(videos: impl Iterator<Item = Video>, limit: i64, offset: i64) -> Vec<Video> {
    videos
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(0))
        .collect()
}

#[async_trait]
impl VideoStore for MemoryStore {
    async fn exists_by_title(&self, title: &str) -> Result<bool, sqlx::Error> {
        let wanted = title.to_lowercase();
        Ok(self
            .lock()
            .videos
            .iter()
            .any(|v| v.title.to_lowercase() == wanted))
    }

    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        self.check_writable()?;
        let mut inner = self.lock();
        inner.next_id += 1;
        let now = Utc::now();
        let video = Video {
            id: inner.next_id,
            title: input.title.clone(),
            director: input.director.clone(),
            cast_members: input.cast.clone(),
            file_url: input.file_url.clone(),
            file_size: input.file_size,
            format: input.format.clone(),
            resolution: input.resolution,
            duration: input.duration,
            is_active: true,
            created_at: now,
            updated_at: now,
            metadata: VideoMetadata {
                genre: input.metadata.genre.clone(),
                synopsis: input.metadata.synopsis.clone(),
                release_year: input.metadata.release_year,
                running_time: input.metadata.running_time,
            },
        };
        inner.videos.push(video.clone());
        self.video_writes.fetch_add(1, Ordering::SeqCst);
        Ok(video)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        Ok(self.lock().videos.iter().find(|v| v.id == id).cloned())
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.check_writable()?;
        let mut inner = self.lock();
        let Some(video) = inner.videos.iter_mut().find(|v| v.id == id) else {
            return Ok(false);
        };
        video.is_active = false;
        video.updated_at = Utc::now();
        self.video_writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn search(
        &self,
        tsquery: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let terms = tsquery_terms(tsquery);
        let inner = self.lock();
        let hits = inner.videos.iter().filter(|v| v.is_active).filter(|v| {
            let words = search_words(v);
            !terms.is_empty()
                && terms
                    .iter()
                    .all(|term| words.iter().any(|w| w.starts_with(term.as_str())))
        });
        Ok(window(hits.cloned(), limit, offset))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        let inner = self.lock();
        Ok(window(inner.videos.iter().cloned(), limit, offset))
    }
}

#[async_trait]
impl EngagementStore for MemoryStore {
    async fn find_by_video_id(
        &self,
        video_id: DbId,
    ) -> Result<Option<VideoEngagement>, sqlx::Error> {
        Ok(self.lock().engagements.get(&video_id).cloned())
    }

    async fn increment(
        &self,
        video_id: DbId,
        kind: EngagementType,
    ) -> Result<VideoEngagement, sqlx::Error> {
        self.check_writable()?;
        let mut inner = self.lock();
        let now = Utc::now();
        let row = inner
            .engagements
            .entry(video_id)
            .or_insert_with(|| VideoEngagement {
                video_id,
                impressions: 0,
                views: 0,
                created_at: now,
                updated_at: now,
            });
        match kind {
            EngagementType::Impression => row.impressions += 1,
            EngagementType::View => row.views += 1,
        }
        row.updated_at = now;
        let row = row.clone();
        self.engagement_writes.fetch_add(1, Ordering::SeqCst);
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsquery_terms_strip_prefix_markers() {
        assert_eq!(tsquery_terms("act:* & heat:*"), vec!["act", "heat"]);
        assert!(tsquery_terms("").is_empty());
    }

    #[test]
    fn window_skips_and_takes() {
        let now = Utc::now();
        let make = |id| Video {
            id,
            title: format!("V{id}"),
            director: String::new(),
            cast_members: Vec::new(),
            file_url: None,
            file_size: None,
            format: None,
            resolution: None,
            duration: None,
            is_active: true,
            created_at: now,
            updated_at: now,
            metadata: VideoMetadata {
                genre: "Drama".into(),
                synopsis: None,
                release_year: None,
                running_time: None,
            },
        };
        let page = window((1..=5).map(make), 2, 2);
        assert_eq!(page.iter().map(|v| v.id).collect::<Vec<_>>(), vec![3, 4]);
    }
}
