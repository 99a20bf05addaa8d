use crate::modules::directory::domain::{LookupField, SearchResultSet};
use crate::modules::directory::traits::{DirectoryApi, UniversityDirectory};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, LookupTimer};
use async_trait::async_trait;
use std::sync::Arc;

/// Country lookup with a single fallback to a name query.
///
/// The directory indexes some institutions by name rather than by strict
/// country, so an empty country result is retried once with the `name`
/// parameter before an empty set is reported.
pub struct DirectoryClient {
    api: Arc<dyn DirectoryApi>,
}

impl DirectoryClient {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api }
    }

    pub fn provider_name(&self) -> &str {
        self.api.provider_name()
    }
}

#[async_trait]
impl UniversityDirectory for DirectoryClient {
    async fn lookup(&self, country: &str) -> AppResult<SearchResultSet> {
        let query = country.trim();
        let timer = LookupTimer::start(query);

        let by_country = self.api.fetch(LookupField::Country, query).await?;
        if !by_country.is_empty() {
            LogContext::directory_query(
                self.api.provider_name(),
                LookupField::Country.as_param(),
                by_country.len(),
                timer.finish(LookupField::Country.as_param()),
            );
            return Ok(by_country);
        }

        log::debug!(
            "{}: no match for country '{}', retrying as name query",
            self.api.provider_name(),
            query
        );

        let by_name = self.api.fetch(LookupField::Name, query).await?;
        LogContext::directory_query(
            self.api.provider_name(),
            LookupField::Name.as_param(),
            by_name.len(),
            timer.finish(LookupField::Name.as_param()),
        );
        Ok(by_name)
    }
}
