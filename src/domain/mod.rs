pub mod report;
pub mod selection;
pub mod snapshot;

pub use report::{version_label, DiffBlock};
pub use selection::select_representative;
pub use snapshot::Snapshot;
