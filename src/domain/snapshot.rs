use chrono::NaiveDateTime;

/// Format of Wayback Machine capture timestamps (e.g. `20200101123045`)
const WAYBACK_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One archived capture of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub archive_url: String,
    pub timestamp: String,
}

impl Snapshot {
    pub fn new(archive_url: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            archive_url: archive_url.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Capture time parsed from the timestamp, for display only.
    /// Ordering and selection always use the raw timestamp string.
    pub fn captured_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, WAYBACK_TIMESTAMP_FORMAT).ok()
    }

    /// Human readable capture time, falling back to the raw timestamp
    pub fn display_time(&self) -> String {
        self.captured_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| self.timestamp.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_at_parses_wayback_timestamp() {
        let snapshot = Snapshot::new("https://web.archive.org/web/20200101123045/x", "20200101123045");
        let dt = snapshot.captured_at().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2020-01-01 12:30:45");
        assert_eq!(snapshot.display_time(), "2020-01-01 12:30:45");
    }

    #[test]
    fn test_opaque_timestamp_is_kept_verbatim() {
        let snapshot = Snapshot::new("mem://a", "2020-06-01");
        assert!(snapshot.captured_at().is_none());
        assert_eq!(snapshot.display_time(), "2020-06-01");
    }
}
