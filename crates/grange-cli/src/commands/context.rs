use anyhow::{Context as _, Result};
use grange_api::BackendClient;
use grange_application::FarmContext;
use grange_infrastructure::{AppConfig, SessionStoreImpl};
use std::sync::Arc;
use std::time::Duration;

/// Wires config, HTTP client and session store into the use-case context.
pub fn build() -> Result<FarmContext> {
    let config = AppConfig::load_default().context("Failed to load configuration")?;
    let client = BackendClient::new(&config.backend_url)
        .with_timeout(Duration::from_secs(config.request_timeout_secs));
    let store = SessionStoreImpl::new().context("Failed to open session storage")?;
    Ok(FarmContext::new(Arc::new(client), Arc::new(store)))
}
