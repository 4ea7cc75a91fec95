//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is designed to be shared via `Arc<EventBus>` across the
//! application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use vidcat_core::engagement::{EngagementEvent, EngagementType};
use vidcat_core::types::DbId;

// ---------------------------------------------------------------------------
// CatalogEvent
// ---------------------------------------------------------------------------

/// A domain event that occurred in the catalog.
///
/// Constructed via [`CatalogEvent::new`] and enriched with
/// [`with_video`](CatalogEvent::with_video) and
/// [`with_payload`](CatalogEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEvent {
    /// Dot-separated event name, e.g. `"engagement.view"`.
    pub event_type: String,

    /// The video the event concerns, if any.
    pub video_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl CatalogEvent {
    /// Create a new event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            video_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the video the event concerns.
    pub fn with_video(mut self, video_id: DbId) -> Self {
        self.video_id = Some(video_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

impl From<&EngagementEvent> for CatalogEvent {
    fn from(event: &EngagementEvent) -> Self {
        let event_type = match event.kind {
            EngagementType::Impression => "engagement.impression",
            EngagementType::View => "engagement.view",
        };
        let payload = serde_json::to_value(event).unwrap_or_default();
        CatalogEvent {
            event_type: event_type.to_string(),
            video_id: Some(event.video_id),
            payload,
            timestamp: event.occurred_at,
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use vidcat_events::bus::{CatalogEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(CatalogEvent::new("video.published"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<CatalogEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns the number of subscribers that received it; with none the
    /// event is dropped.
    pub fn publish(&self, event: CatalogEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(dropped)) => {
                tracing::debug!(event_type = %dropped.event_type, "No subscribers, event dropped");
                0
            }
        }
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.sender.subscribe()
    }

    /// Number of live receivers. Events published while this is zero are lost.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let event = CatalogEvent::new("video.published")
            .with_video(42)
            .with_payload(serde_json::json!({"title": "Heat"}));

        assert_eq!(bus.publish(event), 1);

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.event_type, "video.published");
        assert_eq!(received.video_id, Some(42));
        assert_eq!(received.payload["title"], "Heat");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.publish(CatalogEvent::new("multi.test")), 2);

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");

        assert_eq!(e1.event_type, "multi.test");
        assert_eq!(e2.event_type, "multi.test");
    }

    #[test]
    fn subscriber_count_tracks_live_receivers() {
        let bus = EventBus::default();
        assert_eq!(bus.subscriber_count(), 0);

        let rx = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(rx);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        assert_eq!(bus.publish(CatalogEvent::new("orphan.event")), 0);
    }

    #[test]
    fn engagement_event_converts_with_type_name() {
        let engagement = EngagementEvent::new(9, EngagementType::Impression);
        let event = CatalogEvent::from(&engagement);

        assert_eq!(event.event_type, "engagement.impression");
        assert_eq!(event.video_id, Some(9));
        assert_eq!(event.payload["type"], "IMPRESSION");
        assert_eq!(event.timestamp, engagement.occurred_at);
    }
}
