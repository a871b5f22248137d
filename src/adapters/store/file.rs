use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::DiffBlock;
use crate::ports::{ReportSession, ReportStore};

/// Report written to a UTF-8 text file, replaced on every run
#[derive(Debug, Clone)]
pub struct FileReportStore {
    path: PathBuf,
}

impl FileReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportStore for FileReportStore {
    fn begin(&self) -> Result<Box<dyn ReportSession>, Box<dyn std::error::Error + Send + Sync>> {
        let file = File::create(&self.path)?;
        debug!("Opened report {}", self.path.display());

        Ok(Box::new(FileReportSession {
            writer: BufWriter::new(file),
        }))
    }
}

/// Open report file. The buffered writer flushes when dropped, so blocks
/// appended before a failure stay on disk.
struct FileReportSession {
    writer: BufWriter<File>,
}

impl ReportSession for FileReportSession {
    fn append(&mut self, block: &DiffBlock) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.writer.write_all(block.render().as_bytes())?;
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.writer.flush()?;
        Ok(())
    }
}
