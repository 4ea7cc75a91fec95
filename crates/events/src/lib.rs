//! Vidcat event bus.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`. Stands in for the downstream ingestion
//!   pipeline that engagement events can be forwarded to.
//! - [`CatalogEvent`] — the event envelope carried on the bus.

pub mod bus;

pub use bus::{CatalogEvent, EventBus};
