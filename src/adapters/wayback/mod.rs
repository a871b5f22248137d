mod content;
mod index;
mod parser;
#[cfg(test)]
mod test_server;

use reqwest::Client;

pub use content::WaybackContentSource;
pub use index::WaybackArchiveIndex;

pub const DEFAULT_CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";
pub const DEFAULT_ARCHIVE_BASE: &str = "https://web.archive.org/web";

/// Endpoints and query options for the Wayback Machine
#[derive(Debug, Clone)]
pub struct WaybackConfig {
    pub cdx_endpoint: String,
    pub archive_base: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub filters: Vec<String>,
}

impl WaybackConfig {
    pub fn new(cdx_endpoint: impl Into<String>, archive_base: impl Into<String>) -> Self {
        Self {
            cdx_endpoint: cdx_endpoint.into(),
            archive_base: archive_base.into(),
            from: None,
            to: None,
            filters: Vec::new(),
        }
    }

    pub fn public() -> Self {
        Self::new(DEFAULT_CDX_ENDPOINT, DEFAULT_ARCHIVE_BASE)
    }

    pub fn with_range(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }
}

impl Default for WaybackConfig {
    fn default() -> Self {
        Self::public()
    }
}

/// Combined adapter for the index and content sides of the archive
#[derive(Debug, Clone)]
pub struct WaybackAdapter {
    client: Client,
    config: WaybackConfig,
}

impl WaybackAdapter {
    pub fn new(client: Client, config: WaybackConfig) -> Self {
        Self { client, config }
    }

    pub fn archive_index(&self) -> WaybackArchiveIndex {
        WaybackArchiveIndex::new(self.client.clone(), self.config.clone())
    }

    pub fn content_source(&self) -> WaybackContentSource {
        WaybackContentSource::new(self.client.clone())
    }
}
