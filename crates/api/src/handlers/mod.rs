pub mod auth;
pub mod engagement;
pub mod video;
