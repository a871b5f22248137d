use async_trait::async_trait;

/// Port for retrieving the readable text of one capture
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Download the capture at `archive_url` and return its visible text
    async fn fetch_text(&self, archive_url: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
