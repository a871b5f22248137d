use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::adapters::html;
use crate::ports::ContentSource;

/// Downloads archived captures and reduces them to visible text
pub struct WaybackContentSource {
    client: Client,
}

impl WaybackContentSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for WaybackContentSource {
    async fn fetch_text(&self, archive_url: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(archive_url).send().await?.error_for_status()?;
        let markup = response.text().await?;
        debug!("Fetched {} bytes from {}", markup.len(), archive_url);

        Ok(html::visible_text(&markup))
    }
}
