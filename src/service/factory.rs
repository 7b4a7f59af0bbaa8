use crate::config::Config;
use crate::error::Result;
use crate::service::{ContentService, RestContentService};
use std::sync::Arc;

/// Builds the persistence collaborator described by the configuration.
///
/// Offline mode yields `None`: the editor then applies every mutation
/// locally without any persistence calls.
pub fn create_service(config: &Config) -> Result<Option<Arc<dyn ContentService>>> {
    if config.offline {
        return Ok(None);
    }

    let service = RestContentService::new(
        config.api_base_url.clone(),
        config.api_key.clone(),
        config.request_timeout_secs,
    )?;
    Ok(Some(Arc::new(service)))
}
