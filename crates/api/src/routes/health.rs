//! `GET /health`: database reachability, schema currency and where
//! engagement events are going.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vidcat_db::MigrationStatus;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
    pub engagement: EngagementHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Applied migrations; absent when the bookkeeping table is unreadable.
    pub migrations_applied: Option<i64>,
    pub migrations_known: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EngagementHealth {
    /// `"forwarding"` or `"local"`.
    pub sink: &'static str,
    /// Live event bus receivers. Forwarded events are dropped at zero.
    pub bus_subscribers: usize,
}

/// Healthy only when the database answers, its schema is current, and
/// forwarded engagement events have somewhere to go.
fn overall_status(
    reachable: bool,
    migrations: Option<MigrationStatus>,
    forwarding: bool,
    bus_subscribers: usize,
) -> &'static str {
    let schema_current = migrations.is_some_and(|m| m.is_current());
    let events_delivered = !forwarding || bus_subscribers > 0;
    if reachable && schema_current && events_delivered {
        "ok"
    } else {
        "degraded"
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = vidcat_db::health_check(&state.pool).await.is_ok();
    let migrations = if reachable {
        match vidcat_db::migration_status(&state.pool).await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read migration status");
                None
            }
        }
    } else {
        None
    };

    let forwarding = state.config.forward_engagement_events;
    let bus_subscribers = state.event_bus.subscriber_count();

    Json(HealthResponse {
        status: overall_status(reachable, migrations, forwarding, bus_subscribers),
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            migrations_applied: migrations.map(|m| m.applied),
            migrations_known: migrations.map(|m| m.known),
        },
        engagement: EngagementHealth {
            sink: if forwarding { "forwarding" } else { "local" },
            bus_subscribers,
        },
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: MigrationStatus = MigrationStatus {
        applied: 2,
        known: 2,
    };

    #[test]
    fn current_schema_with_local_sink_is_ok() {
        assert_eq!(overall_status(true, Some(CURRENT), false, 0), "ok");
    }

    #[test]
    fn pending_migrations_degrade() {
        let behind = MigrationStatus {
            applied: 1,
            known: 2,
        };
        assert_eq!(overall_status(true, Some(behind), false, 0), "degraded");
        assert_eq!(overall_status(true, None, false, 0), "degraded");
    }

    #[test]
    fn forwarding_without_subscribers_degrades() {
        assert_eq!(overall_status(true, Some(CURRENT), true, 0), "degraded");
        assert_eq!(overall_status(true, Some(CURRENT), true, 1), "ok");
    }

    #[test]
    fn unreachable_database_degrades() {
        assert_eq!(overall_status(false, None, false, 0), "degraded");
    }
}
