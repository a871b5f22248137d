use thiserror::Error;
use tracing::warn;

use crate::domain::Snapshot;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Build the replay URL of a capture
pub fn archive_url(archive_base: &str, timestamp: &str, original: &str) -> String {
    format!("{}/{}/{}", archive_base.trim_end_matches('/'), timestamp, original)
}

/// Parse a CDX server response requested with `output=json`.
///
/// The body is an array of string rows; the first row names the columns.
/// Rows too short to hold a timestamp and an original URL are skipped.
pub fn parse_cdx_json(body: &str, archive_base: &str) -> ParseResult<Vec<Snapshot>> {
    merge_cdx_pages(&[body], archive_base)
}

/// Parse the answer to a `showNumPages=true` query. An empty body means
/// the index holds nothing for the URL.
pub fn parse_page_count(body: &str) -> ParseResult<usize> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(0);
    }

    body.parse::<usize>()
        .map_err(|e| ParseError::Parse(format!("Invalid page count {:?}: {}", body, e)))
}

/// Concatenate the rows of consecutive CDX result pages, in page order.
///
/// The first non-empty page supplies the header. Later pages repeating
/// that header have it dropped; pages without one are all data.
pub fn merge_cdx_pages<S: AsRef<str>>(pages: &[S], archive_base: &str) -> ParseResult<Vec<Snapshot>> {
    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }

        let mut page_rows: Vec<Vec<String>> = serde_json::from_str(page)?;
        if header.is_none() {
            if !page_rows.is_empty() {
                header = Some(page_rows.remove(0));
            }
        } else if page_rows.first() == header.as_ref() {
            page_rows.remove(0);
        }
        rows.extend(page_rows);
    }

    let header = match header {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    let column = |name: &str| {
        header
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
    };
    let timestamp_idx = column("timestamp")?;
    let original_idx = column("original")?;

    let mut snapshots = Vec::new();
    for (line, row) in rows.into_iter().enumerate() {
        match (row.get(timestamp_idx), row.get(original_idx)) {
            (Some(timestamp), Some(original)) if !timestamp.is_empty() => {
                snapshots.push(Snapshot::new(
                    archive_url(archive_base, timestamp, original),
                    timestamp.clone(),
                ));
            }
            _ => warn!("Skipping incomplete CDX row {}: {:?}", line + 1, row),
        }
    }

    Ok(snapshots)
}

/// Validate a `from`/`to` bound: 1 to 14 digits of a Wayback timestamp
pub fn validate_bound(bound: &str) -> ParseResult<()> {
    if bound.is_empty() || bound.len() > 14 || !bound.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::Parse(format!("Invalid timestamp bound: {:?}", bound)));
    }
    Ok(())
}
