use thiserror::Error;

/// Failures that end a run
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Invalid target URL {url:?}: {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("Archive query failed for {url}: {source}")]
    ArchiveQuery {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to fetch version from {timestamp}: {source}")]
    ContentFetch {
        timestamp: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Report error: {0}")]
    Report(#[source] Box<dyn std::error::Error + Send + Sync>),
}
