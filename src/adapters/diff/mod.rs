mod lines;
mod unified;

pub use lines::split_lines;
pub use unified::UnifiedDiffer;
