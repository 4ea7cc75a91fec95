//! Authentication and authorization extractors.
//!
//! - [`auth::AuthClient`] -- Extracts the calling client from a Bearer access token.
//! - [`rbac::RequirePublisher`] -- Requires the `publisher` role.

pub mod auth;
pub mod rbac;
