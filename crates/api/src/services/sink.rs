//! Where engagement events go once the video has been resolved.
//!
//! [`ForwardingSink`] hands events to the downstream pipeline (the
//! [`EventBus`]) and never touches the counters. [`LocalSink`] folds each
//! event into the per-video counters. One of the two is chosen at startup
//! from `ENGAGEMENT_FORWARD_EVENTS`.

use std::sync::Arc;

use async_trait::async_trait;
use vidcat_core::engagement::EngagementEvent;
use vidcat_core::error::CoreError;
use vidcat_db::models::engagement::VideoEngagement;
use vidcat_events::{CatalogEvent, EventBus};

use super::store::EngagementStore;
use crate::error::AppResult;

/// What happened to a tracked event.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    /// Handed to the external pipeline; nothing persisted.
    Forwarded,
    /// Counted locally; carries the updated counters.
    Recorded(VideoEngagement),
}

/// Destination for engagement events.
#[async_trait]
pub trait EngagementSink: Send + Sync {
    async fn record(&self, event: &EngagementEvent) -> AppResult<TrackOutcome>;
}

/// Publishes events on the event bus.
pub struct ForwardingSink {
    bus: Arc<EventBus>,
}

impl ForwardingSink {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl EngagementSink for ForwardingSink {
    async fn record(&self, event: &EngagementEvent) -> AppResult<TrackOutcome> {
        let receivers = self.bus.publish(CatalogEvent::from(event));
        tracing::info!(
            video_id = event.video_id,
            kind = %event.kind,
            receivers,
            "Engagement event forwarded"
        );
        Ok(TrackOutcome::Forwarded)
    }
}

/// Increments the counters in the engagement store.
pub struct LocalSink {
    store: Arc<dyn EngagementStore>,
}

impl LocalSink {
    pub fn new(store: Arc<dyn EngagementStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EngagementSink for LocalSink {
    async fn record(&self, event: &EngagementEvent) -> AppResult<TrackOutcome> {
        let row = self
            .store
            .increment(event.video_id, event.kind)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, video_id = event.video_id, "Failed to record engagement");
                CoreError::Internal(format!(
                    "Failed to record engagement for Video ID: {}",
                    event.video_id
                ))
            })?;
        tracing::info!(
            video_id = row.video_id,
            kind = %event.kind,
            impressions = row.impressions,
            views = row.views,
            "Engagement recorded"
        );
        Ok(TrackOutcome::Recorded(row))
    }
}
