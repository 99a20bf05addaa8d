use crate::modules::directory::domain::{LookupField, SearchResultSet};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Transport-level access to the university directory.
///
/// One call is one upstream request; implementations normalize the raw
/// payload into records but apply no fallback logic.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Human readable name for logging
    fn provider_name(&self) -> &str;

    /// Fetch every entry matching `value` on `field`
    async fn fetch(&self, field: LookupField, value: &str) -> AppResult<SearchResultSet>;
}

/// Country lookup consumed by the search session.
#[async_trait]
pub trait UniversityDirectory: Send + Sync {
    /// Resolve a country query to records. An empty set is a valid outcome.
    async fn lookup(&self, country: &str) -> AppResult<SearchResultSet>;
}
