pub mod diff;
pub mod html;
pub mod store;
pub mod wayback;

pub use diff::UnifiedDiffer;
pub use store::FileReportStore;
#[cfg(test)]
pub use store::MemoryReportStore;
pub use wayback::WaybackAdapter;
