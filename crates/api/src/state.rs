use std::sync::Arc;

use vidcat_events::EventBus;

use crate::config::ServerConfig;
use crate::services::sink::{EngagementSink, ForwardingSink, LocalSink};
use crate::services::store::{EngagementStore, PgStore, VideoStore};
use crate::services::{EngagementService, VideoService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: vidcat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Destination of forwarded engagement events.
    pub event_bus: Arc<EventBus>,
    pub videos: Arc<VideoService>,
    pub engagements: Arc<EngagementService>,
}

impl AppState {
    /// Wire the PostgreSQL stores and pick the engagement sink from
    /// `config.forward_engagement_events`.
    pub fn new(pool: vidcat_db::DbPool, config: ServerConfig, event_bus: Arc<EventBus>) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        let sink: Arc<dyn EngagementSink> = if config.forward_engagement_events {
            Arc::new(ForwardingSink::new(Arc::clone(&event_bus)))
        } else {
            Arc::new(LocalSink::new(store.clone()))
        };
        Self::with_stores(pool, config, event_bus, store.clone(), store, sink)
    }

    /// Build state from explicit stores and sink.
    pub fn with_stores(
        pool: vidcat_db::DbPool,
        config: ServerConfig,
        event_bus: Arc<EventBus>,
        videos: Arc<dyn VideoStore>,
        engagements: Arc<dyn EngagementStore>,
        sink: Arc<dyn EngagementSink>,
    ) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            event_bus,
            videos: Arc::new(VideoService::new(Arc::clone(&videos))),
            engagements: Arc::new(EngagementService::new(videos, engagements, sink)),
        }
    }
}
