//! Process configuration, read from the environment in one place and
//! passed into constructors.

use std::net::SocketAddr;

use anyhow::Context;

/// Configuration for the API binary.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// HS256 signing secret shared by token issue and verification.
    pub jwt_secret: String,
    /// Validity window for tokens issued by the login endpoint.
    pub token_ttl: chrono::Duration,
}

impl ApiConfig {
    /// Read configuration from `BIND_ADDR` and `JWT_SECRET`.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("invalid BIND_ADDR")?;

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl: chrono::Duration::hours(1),
        })
    }
}
