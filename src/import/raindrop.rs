use super::{BookmarkPage, BookmarkSource, ImportError};
use crate::config::BookmarksConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection values for the bookmark service, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaindropSettings {
    pub endpoint: String,
    pub collection_id: String,
    pub token: String,
    pub page_size: u32,
}

impl RaindropSettings {
    /// Resolve the variables named in `config`; any missing one is an error
    pub fn from_env(config: &BookmarksConfig) -> Result<Self, ImportError> {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Resolve the variables through `lookup` instead of the process environment
    pub fn from_lookup<F>(config: &BookmarksConfig, lookup: F) -> Result<Self, ImportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ImportError::MissingEnv(name.to_string()))
        };

        Ok(Self {
            endpoint: read(&config.endpoint_env)?,
            collection_id: read(&config.collection_id_env)?,
            token: read(&config.token_env)?,
            page_size: config.page_size,
        })
    }
}

/// Bookmark source backed by the service's "multiple raindrops" endpoint
pub struct RaindropClient {
    client: Client,
    settings: RaindropSettings,
}

impl RaindropClient {
    pub fn new(settings: RaindropSettings) -> Result<Self, ImportError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, settings })
    }

    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/{}?perpage={}&page={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.collection_id,
            self.settings.page_size,
            page
        )
    }
}

#[async_trait]
impl BookmarkSource for RaindropClient {
    async fn fetch_page(&self, page: u32) -> Result<BookmarkPage, ImportError> {
        let url = self.page_url(page);
        log::debug!("Fetching bookmark page {}", page);

        let response = self.client.get(&url).bearer_auth(&self.settings.token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status {
                status: status.as_u16(),
                page,
            });
        }

        Ok(response.json::<BookmarkPage>().await?)
    }
}
