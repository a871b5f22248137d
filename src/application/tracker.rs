use std::pin::pin;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::domain::{select_representative, version_label, DiffBlock, Snapshot};
use crate::ports::{ArchiveIndex, ContentSource, ReportStore, TextDiffer};

use super::TrackError;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fewer than two captures were selected; nothing was written
    NotEnoughVersions { found: usize },
    /// Every adjacent pair was compared
    Completed { pairs: usize, blocks: usize },
}

/// Selects captures of a page, diffs each adjacent pair and writes the report
pub struct ChangeTracker {
    archive: Arc<dyn ArchiveIndex>,
    content: Arc<dyn ContentSource>,
    differ: Arc<dyn TextDiffer>,
    reports: Arc<dyn ReportStore>,
    fetch_concurrency: usize,
}

impl ChangeTracker {
    pub fn new(
        archive: Arc<dyn ArchiveIndex>,
        content: Arc<dyn ContentSource>,
        differ: Arc<dyn TextDiffer>,
        reports: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            archive,
            content,
            differ,
            reports,
            fetch_concurrency: 1,
        }
    }

    /// Number of captures downloaded ahead of the one being diffed.
    /// 1 keeps the run strictly sequential.
    pub fn with_fetch_concurrency(mut self, fetch_concurrency: usize) -> Self {
        self.fetch_concurrency = fetch_concurrency.max(1);
        self
    }

    /// Query the archive once and reduce the result to the captures to compare
    pub async fn select_snapshots(&self, url: &str) -> Result<Vec<Snapshot>, TrackError> {
        validate_target(url)?;

        info!("Fetching archived versions...");
        let captures = self
            .archive
            .list_captures(url)
            .await
            .map_err(|source| TrackError::ArchiveQuery {
                url: url.to_string(),
                source,
            })?;

        let selected = select_representative(&captures);
        info!("Archive holds {} captures, comparing {}", captures.len(), selected.len());

        Ok(selected)
    }

    /// Diff two rendered captures. `None` when their lines are identical.
    pub fn diff_pair(
        &self,
        from: &Snapshot,
        from_text: &str,
        to: &Snapshot,
        to_text: &str,
    ) -> Option<DiffBlock> {
        let diff = self.differ.unified_diff(
            from_text,
            to_text,
            &version_label(&from.timestamp),
            &version_label(&to.timestamp),
        );

        if diff.is_empty() {
            return None;
        }

        Some(DiffBlock::new(from.timestamp.clone(), to.timestamp.clone(), diff))
    }

    /// Run the whole pipeline for `url`
    pub async fn run(&self, url: &str) -> Result<RunOutcome, TrackError> {
        let snapshots = self.select_snapshots(url).await?;

        if snapshots.len() < 2 {
            info!("Not enough versions to compare.");
            return Ok(RunOutcome::NotEnoughVersions {
                found: snapshots.len(),
            });
        }

        let mut session = self.reports.begin().map_err(TrackError::Report)?;

        let texts = stream::iter(snapshots.iter())
            .map(|snapshot| self.fetch(snapshot))
            .buffered(self.fetch_concurrency);
        let mut texts = pin!(texts);

        let mut previous: Option<(&Snapshot, String)> = None;
        let mut pairs = 0;
        let mut blocks = 0;

        while let Some(fetched) = texts.next().await {
            let (snapshot, text) = fetched?;

            if let Some((from, from_text)) = previous.take() {
                pairs += 1;
                match self.diff_pair(from, &from_text, snapshot, &text) {
                    Some(block) => {
                        session.append(&block).map_err(TrackError::Report)?;
                        blocks += 1;
                    }
                    None => debug!("No changes between {} and {}", from.timestamp, snapshot.timestamp),
                }
            }

            previous = Some((snapshot, text));
        }

        session.finish().map_err(TrackError::Report)?;

        Ok(RunOutcome::Completed { pairs, blocks })
    }

    async fn fetch<'a>(&self, snapshot: &'a Snapshot) -> Result<(&'a Snapshot, String), TrackError> {
        info!("Fetching version from {}...", snapshot.timestamp);
        debug!("Capture time {}, locator {}", snapshot.display_time(), snapshot.archive_url);

        let text = self
            .content
            .fetch_text(&snapshot.archive_url)
            .await
            .map_err(|source| TrackError::ContentFetch {
                timestamp: snapshot.timestamp.clone(),
                source,
            })?;

        Ok((snapshot, text))
    }
}

/// The index takes full URLs and bare hosts or paths alike; only a blank target has nothing to query
fn validate_target(url: &str) -> Result<(), TrackError> {
    if url.trim().is_empty() {
        return Err(TrackError::InvalidTarget {
            url: url.to_string(),
            reason: "empty target".to_string(),
        });
    }
    Ok(())
}
