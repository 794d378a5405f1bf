// store/mod.rs - 记录存储抽象层
//! 提供统一的记录存储接口：整批替换 + 按字段过滤

mod memory;
mod persistent;

pub use memory::*;
pub use persistent::*;

use crate::query::SizeOperator;
use crate::schema::{FileRecord, NumericField, TextField};

/// 存储错误类型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 记录存储
///
/// 实现者只需提供清空、批量写入、计数和按插入顺序读取全部记录；
/// 过滤操作默认在读取结果上线性扫描。
pub trait RecordStore {
    /// 删除全部记录
    fn clear(&mut self) -> StoreResult<()>;

    /// 追加一批记录，保持顺序
    fn bulk_insert(&mut self, records: Vec<FileRecord>) -> StoreResult<()>;

    /// 当前记录数
    fn count(&self) -> StoreResult<usize>;

    /// 按插入顺序返回全部记录
    fn records(&self) -> StoreResult<Vec<FileRecord>>;

    /// 文本字段包含子串（大小写敏感）
    fn filter_contains(&self, field: TextField, needle: &str) -> StoreResult<Vec<FileRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| r.text(field).contains(needle))
            .collect())
    }

    /// 文本字段精确相等
    fn filter_equals(&self, field: TextField, value: &str) -> StoreResult<Vec<FileRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| r.text(field) == value)
            .collect())
    }

    /// 数值字段比较：`record.field <op> value`
    fn filter_compare(
        &self,
        field: NumericField,
        op: SizeOperator,
        value: f64,
    ) -> StoreResult<Vec<FileRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| op.matches(r.number(field), value))
            .collect())
    }

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.count()? == 0)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn record(name: &str, path: &str, ext: &str, bytes: f64) -> FileRecord {
        FileRecord {
            file_name: name.to_string(),
            file_path: path.to_string(),
            size: format!("{}K", bytes / 1e3),
            file_extension: ext.to_string(),
            uniform_size: bytes,
        }
    }

    pub fn sample_records() -> Vec<FileRecord> {
        vec![
            record("notes.txt", "/home/user/", "txt", 12_000.0),
            record("report.pdf", "/home/user/docs/", "pdf", 2_000_000.0),
            record("todo.txt", "/tmp/", "txt", 500.0),
            record("Makefile", "/src/", "", 3_000.0),
        ]
    }

    /// 对任意实现跑同一组行为检查
    pub fn exercise_store<S: RecordStore>(store: &mut S) {
        assert!(store.is_empty().unwrap());

        store.bulk_insert(sample_records()).unwrap();
        assert_eq!(store.count().unwrap(), 4);

        let names: Vec<String> = store
            .filter_contains(TextField::FileName, "t")
            .unwrap()
            .into_iter()
            .map(|r| r.file_name)
            .collect();
        assert_eq!(names, vec!["notes.txt", "report.pdf", "todo.txt"]);

        let users = store.filter_contains(TextField::FilePath, "/home/user").unwrap();
        assert_eq!(users.len(), 2);

        let txt = store.filter_equals(TextField::FileExtension, "txt").unwrap();
        assert_eq!(txt.len(), 2);
        assert!(txt.iter().all(|r| r.file_name.ends_with(".txt")));

        let no_ext = store.filter_equals(TextField::FileExtension, "").unwrap();
        assert_eq!(no_ext[0].file_name, "Makefile");

        let big = store
            .filter_compare(NumericField::UniformSize, SizeOperator::GreaterOrEqual, 12_000.0)
            .unwrap();
        assert_eq!(big.len(), 2);

        let exact = store
            .filter_compare(NumericField::UniformSize, SizeOperator::Equal, 500.0)
            .unwrap();
        assert_eq!(exact[0].file_name, "todo.txt");

        store.clear().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.records().unwrap().is_empty());
    }
}
