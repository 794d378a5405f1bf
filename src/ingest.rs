// ingest.rs - CSV 文件导入
//! 读取 CSV 文件并规范化为文件记录

use std::path::{Path, PathBuf};

use crate::normalize::{self, NormalizeError};
use crate::schema::{FileRecord, RawRow, REQUIRED_COLUMNS};

/// CSV 结构问题的具体原因
#[derive(Debug, thiserror::Error)]
pub enum CsvIssue {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// 导入错误类型
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed CSV {}: {source}", .path.display())]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: CsvIssue,
    },
}

impl ImportError {
    fn malformed(path: &Path, source: impl Into<CsvIssue>) -> Self {
        ImportError::MalformedCsv {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// 读取 CSV 的原始行（要求表头包含 FileName / FilePath / Size）
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    if !path.is_file() {
        return Err(ImportError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ImportError::malformed(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| ImportError::malformed(path, e))?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(ImportError::malformed(path, CsvIssue::MissingColumn(missing)));
    }

    reader
        .deserialize::<RawRow>()
        .map(|row| row.map_err(|e| ImportError::malformed(path, e)))
        .collect()
}

/// 读取并规范化整个文件；任何一行出错则整体失败
pub fn import_file(path: &Path) -> Result<Vec<FileRecord>, ImportError> {
    let rows = read_rows(path)?;
    normalize::normalize(&rows).map_err(|e| ImportError::malformed(path, e))
}
