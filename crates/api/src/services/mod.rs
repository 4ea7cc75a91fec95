//! Service layer.
//!
//! Services own the catalog and engagement rules. They talk to storage
//! through the [`store`] traits and to the engagement pipeline through
//! [`sink::EngagementSink`], so both can be swapped at startup or in tests.

pub mod engagement;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod sink;
pub mod store;
pub mod video;

pub use engagement::EngagementService;
pub use video::VideoService;
