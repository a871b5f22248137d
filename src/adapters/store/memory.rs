use std::sync::{Arc, Mutex};

use crate::domain::DiffBlock;
use crate::ports::{ReportSession, ReportStore};

/// In-memory report store recording every session
#[derive(Debug, Clone, Default)]
pub struct MemoryReportStore {
    sessions: Arc<Mutex<Vec<Vec<DiffBlock>>>>,
    finished: Arc<Mutex<usize>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `begin` was called
    pub fn sessions_opened(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Number of sessions closed through `finish`
    pub fn sessions_finished(&self) -> usize {
        *self.finished.lock().unwrap()
    }

    /// Blocks of the most recent session
    pub fn blocks(&self) -> Vec<DiffBlock> {
        self.sessions.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl ReportStore for MemoryReportStore {
    fn begin(&self) -> Result<Box<dyn ReportSession>, Box<dyn std::error::Error + Send + Sync>> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.push(Vec::new());

        Ok(Box::new(MemoryReportSession {
            index: sessions.len() - 1,
            store: self.clone(),
        }))
    }
}

struct MemoryReportSession {
    index: usize,
    store: MemoryReportStore,
}

impl ReportSession for MemoryReportSession {
    fn append(&mut self, block: &DiffBlock) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.store.sessions.lock().unwrap()[self.index].push(block.clone());
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.store.finished.lock().unwrap() += 1;
        Ok(())
    }
}
