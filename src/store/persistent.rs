// store/persistent.rs - 基于 sled 的持久化记录存储
// 记录用 bincode 序列化，key 为大端序号，保证遍历顺序即插入顺序

use sled::{Batch, Db, Tree};
use std::path::Path;

use super::{RecordStore, StoreResult};
use crate::schema::FileRecord;

/// 记录所在的 tree 名称
const RECORDS_TREE: &str = "records";

/// 持久化存储，重启后保留上次导入的数据
pub struct SledRecordStore {
    db: Db,
    records: Tree,
}

impl SledRecordStore {
    /// 创建或打开数据库
    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = sled::open(path)?;
        let records = db.open_tree(RECORDS_TREE)?;
        tracing::info!(" [Store] 记录库已打开: {:?} ({} 条记录)", path, records.len());
        Ok(Self { db, records })
    }

    /// 磁盘占用（字节）
    pub fn size_on_disk(&self) -> u64 {
        self.db.size_on_disk().unwrap_or(0)
    }

    fn key(seq: u64) -> [u8; 8] {
        seq.to_be_bytes()
    }
}

impl RecordStore for SledRecordStore {
    fn clear(&mut self) -> StoreResult<()> {
        self.records.clear()?;
        self.records.flush()?;
        Ok(())
    }

    fn bulk_insert(&mut self, records: Vec<FileRecord>) -> StoreResult<()> {
        let next = self
            .records
            .last()?
            .and_then(|(key, _)| <[u8; 8]>::try_from(key.as_ref()).ok())
            .map(|bytes| u64::from_be_bytes(bytes) + 1)
            .unwrap_or(0);

        let mut batch = Batch::default();
        for (offset, record) in records.iter().enumerate() {
            let data = bincode::serialize(record)?;
            batch.insert(Self::key(next + offset as u64).to_vec(), data);
        }

        self.records.apply_batch(batch)?;
        self.records.flush()?;
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn records(&self) -> StoreResult<Vec<FileRecord>> {
        self.records
            .iter()
            .values()
            .map(|data| -> StoreResult<FileRecord> {
                let data = data?;
                Ok(bincode::deserialize(&data)?)
            })
            .collect()
    }
}
