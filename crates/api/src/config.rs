use crate::auth::clients::{parse_clients, ApiClient};
use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Forward engagement events to the event bus instead of persisting
    /// them (default: `false`).
    pub forward_engagement_events: bool,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Clients allowed to request tokens.
    pub clients: Vec<ApiClient>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `HOST`                      | `0.0.0.0`                  |
    /// | `PORT`                      | `3000`                     |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                       |
    /// | `ENGAGEMENT_FORWARD_EVENTS` | `false`                    |
    /// | `AUTH_CLIENTS`              | empty                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let forward_engagement_events: bool = std::env::var("ENGAGEMENT_FORWARD_EVENTS")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("ENGAGEMENT_FORWARD_EVENTS must be true or false");

        let jwt = JwtConfig::from_env();

        let clients = parse_clients(&std::env::var("AUTH_CLIENTS").unwrap_or_default())
            .unwrap_or_else(|e| panic!("Invalid AUTH_CLIENTS: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            forward_engagement_events,
            jwt,
            clients,
        }
    }
}
