mod file;
#[cfg(test)]
mod memory;

pub use file::FileReportStore;
#[cfg(test)]
pub use memory::MemoryReportStore;
