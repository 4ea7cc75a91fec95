//! Domain primitives shared by every vidcat crate.
//!
//! Nothing in here performs I/O; the database, event and HTTP layers build
//! on these types.

pub mod engagement;
pub mod error;
pub mod roles;
pub mod search;
pub mod types;
