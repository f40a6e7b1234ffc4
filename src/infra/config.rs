use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Selects the store backend: set means Postgres, unset means in-memory.
    pub database_url: Option<String>,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("0.0.0.0:5000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        // An empty DATABASE_URL counts as unset.
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        Self {
            bind_addr,
            database_url,
            cors_origin,
        }
    }
}
