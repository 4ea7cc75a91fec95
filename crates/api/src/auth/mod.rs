//! Authentication primitives.
//!
//! - [`clients`] -- Configured API clients and credential checks.
//! - [`jwt`] -- Access and refresh token generation and validation.
//! - [`secret`] -- Argon2id hashing of client secrets.

pub mod clients;
pub mod jwt;
pub mod secret;
