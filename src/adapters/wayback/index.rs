use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::Snapshot;
use crate::ports::ArchiveIndex;

use super::parser::{self, ParseError};
use super::WaybackConfig;

/// Archive index backed by the Wayback CDX server
pub struct WaybackArchiveIndex {
    client: Client,
    config: WaybackConfig,
}

impl WaybackArchiveIndex {
    pub fn new(client: Client, config: WaybackConfig) -> Self {
        Self { client, config }
    }

    fn query_params(&self, url: &str) -> Result<Vec<(&'static str, String)>, ParseError> {
        let mut params = vec![("url", url.to_string()), ("output", "json".to_string())];

        if let Some(from) = &self.config.from {
            parser::validate_bound(from)?;
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.config.to {
            parser::validate_bound(to)?;
            params.push(("to", to.clone()));
        }
        for filter in &self.config.filters {
            params.push(("filter", filter.clone()));
        }

        Ok(params)
    }

    async fn get(&self, params: &[(&'static str, String)]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        debug!("CDX query {} {:?}", self.config.cdx_endpoint, params);

        let body = self
            .client
            .get(&self.config.cdx_endpoint)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

#[async_trait]
impl ArchiveIndex for WaybackArchiveIndex {
    async fn list_captures(&self, url: &str) -> Result<Vec<Snapshot>, Box<dyn std::error::Error + Send + Sync>> {
        let params = self.query_params(url)?;

        // Results are paged server side; ask how many pages, then read them all in order
        let mut count_params = params.clone();
        count_params.push(("showNumPages", "true".to_string()));
        let pages = parser::parse_page_count(&self.get(&count_params).await?)?;

        let mut bodies = Vec::with_capacity(pages);
        for page in 0..pages {
            let mut page_params = params.clone();
            page_params.push(("page", page.to_string()));
            bodies.push(self.get(&page_params).await?);
        }

        let snapshots = parser::merge_cdx_pages(&bodies, &self.config.archive_base)?;
        debug!("CDX returned {} captures over {} pages for {}", snapshots.len(), pages, url);

        Ok(snapshots)
    }
}
