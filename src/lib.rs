pub mod modules;
pub mod shared;

use modules::directory::{DirectoryClient, HipolabsAdapter};
use modules::search::SearchController;
use shared::config::DirectoryConfig;
use shared::errors::AppResult;
use std::sync::Arc;

/// Wire the Hipolabs adapter, the fallback client and a fresh session.
pub fn build_controller(config: &DirectoryConfig) -> AppResult<SearchController> {
    let adapter = Arc::new(HipolabsAdapter::new(config)?);
    log::debug!(
        "Directory endpoint {} (timeout {}s)",
        adapter.base_url(),
        config.timeout_seconds
    );

    let client = Arc::new(DirectoryClient::new(adapter));
    Ok(SearchController::new(client))
}
