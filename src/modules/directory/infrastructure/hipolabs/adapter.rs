use super::mapper::HipolabsMapper;
use crate::modules::directory::domain::{LookupField, SearchResultSet};
use crate::modules::directory::infrastructure::http_client::CommonHttpHandler;
use crate::modules::directory::traits::DirectoryApi;
use crate::shared::config::DirectoryConfig;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

const PROVIDER_NAME: &str = "Hipolabs";

/// Hipolabs university directory over HTTP
pub struct HipolabsAdapter {
    client: Client,
    base_url: String,
}

impl HipolabsAdapter {
    pub fn new(config: &DirectoryConfig) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(config.timeout(), &config.user_agent)?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create adapter with a custom HTTP client (for testing)
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup URL with an encoded query parameter
    pub fn build_url(&self, field: LookupField, value: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.base_url,
            separator,
            field.as_param(),
            urlencoding::encode(value)
        )
    }
}

#[async_trait]
impl DirectoryApi for HipolabsAdapter {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch(&self, field: LookupField, value: &str) -> AppResult<SearchResultSet> {
        let url = self.build_url(field, value);
        debug!(%url, %field, "directory request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = AppError::from(e);
                log::warn!("{} request for {}='{}' failed: {}", PROVIDER_NAME, field, value, err);
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} API returned error: {}", PROVIDER_NAME, status);
            return Err(AppError::upstream(
                Some(status.as_u16()),
                format!("{} API returned error: {}", PROVIDER_NAME, status),
            ));
        }

        let body = response.text().await.map_err(AppError::from)?;
        let entries = HipolabsMapper::parse_body(&body)?;
        let records = HipolabsMapper::to_domain_list(entries);

        debug!(count = records.len(), %field, "directory response decoded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base_url: &str) -> HipolabsAdapter {
        HipolabsAdapter::with_client(Client::new(), base_url.to_string())
    }

    #[test]
    fn test_build_url_encodes_value() {
        let adapter = adapter("https://universities.hipolabs.com/search");
        assert_eq!(
            adapter.build_url(LookupField::Country, "United States"),
            "https://universities.hipolabs.com/search?country=United%20States"
        );
        assert_eq!(
            adapter.build_url(LookupField::Name, "Côte d'Ivoire"),
            "https://universities.hipolabs.com/search?name=C%C3%B4te%20d%27Ivoire"
        );
    }

    #[test]
    fn test_build_url_appends_to_existing_query() {
        let adapter = adapter("http://localhost/search?limit=5");
        assert_eq!(
            adapter.build_url(LookupField::Country, "India"),
            "http://localhost/search?limit=5&country=India"
        );
    }

    #[test]
    fn test_new_uses_config() {
        let config = DirectoryConfig::default().with_base_url("http://127.0.0.1:9/search");
        let adapter = HipolabsAdapter::new(&config).unwrap();
        assert_eq!(adapter.base_url(), "http://127.0.0.1:9/search");
        assert_eq!(adapter.provider_name(), "Hipolabs");
    }
}
