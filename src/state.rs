//! Shared host state.
//!
//! DESIGN
//! ======
//! `HostState` is injected into Axum handlers via the `State` extractor. It
//! only holds the pooled HTTP client and the backend base URL; the host keeps
//! no per-user data.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct HostState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl HostState {
    /// Build the forwarding client with the configured backend timeout.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
