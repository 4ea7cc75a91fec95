//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod engagement_repo;
pub mod video_repo;

pub use engagement_repo::EngagementRepo;
pub use video_repo::VideoRepo;
