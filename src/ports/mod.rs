pub mod archive_index;
pub mod content_source;
pub mod report_store;
pub mod text_differ;

pub use archive_index::ArchiveIndex;
pub use content_source::ContentSource;
pub use report_store::{ReportSession, ReportStore};
pub use text_differ::TextDiffer;
