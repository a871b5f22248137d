/// Width of the separator line closing each block
pub const SEPARATOR_WIDTH: usize = 80;

/// Label used for one side of a unified diff header
pub fn version_label(timestamp: &str) -> String {
    format!("Version_{}.txt", timestamp)
}

/// Changes between two adjacent captures, as written to the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffBlock {
    pub from_timestamp: String,
    pub to_timestamp: String,
    pub diff: String,
}

impl DiffBlock {
    pub fn new(
        from_timestamp: impl Into<String>,
        to_timestamp: impl Into<String>,
        diff: impl Into<String>,
    ) -> Self {
        Self {
            from_timestamp: from_timestamp.into(),
            to_timestamp: to_timestamp.into(),
            diff: diff.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Changes from {} to {}:\n{}\n{}\n",
            self.from_timestamp,
            self.to_timestamp,
            self.diff,
            "-".repeat(SEPARATOR_WIDTH)
        )
    }
}
