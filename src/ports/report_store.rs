use crate::domain::DiffBlock;

/// Port for the destination of a run's report
pub trait ReportStore: Send + Sync {
    /// Start a new report, discarding whatever a previous run left behind
    fn begin(&self) -> Result<Box<dyn ReportSession>, Box<dyn std::error::Error + Send + Sync>>;
}

/// An open report. Dropping it releases the underlying resource and keeps
/// every block appended so far.
pub trait ReportSession: Send {
    /// Append one block to the report
    fn append(&mut self, block: &DiffBlock) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Flush and close the report
    fn finish(self: Box<Self>) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
