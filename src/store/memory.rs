// store/memory.rs - 内存记录存储

use super::{RecordStore, StoreResult};
use crate::schema::FileRecord;

/// 进程内存储，重启后数据丢失
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Vec<FileRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn clear(&mut self) -> StoreResult<()> {
        self.records.clear();
        Ok(())
    }

    fn bulk_insert(&mut self, records: Vec<FileRecord>) -> StoreResult<()> {
        self.records.extend(records);
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn records(&self) -> StoreResult<Vec<FileRecord>> {
        Ok(self.records.clone())
    }
}
