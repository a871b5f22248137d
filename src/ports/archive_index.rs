use async_trait::async_trait;

use crate::domain::Snapshot;

/// Port for listing the known captures of a page
#[async_trait]
pub trait ArchiveIndex: Send + Sync {
    /// List every capture of `url`, in the order the archive reports them
    async fn list_captures(&self, url: &str) -> Result<Vec<Snapshot>, Box<dyn std::error::Error + Send + Sync>>;
}
