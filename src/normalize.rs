// normalize.rs - CSV 行规范化
//! 从原始行派生扩展名、目录路径和统一字节数

use crate::schema::{FileRecord, RawRow};
use crate::units::{self, SizeError};

/// 规范化错误（带行号，行号从 0 开始计数数据行）
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("row {row}: malformed size '{size}': {source}")]
    MalformedSize {
        row: usize,
        size: String,
        #[source]
        source: SizeError,
    },

    #[error("row {row}: file name is empty")]
    EmptyFileName { row: usize },
}

/// 规范化整批数据；任意一行失败则整批失败
pub fn normalize(rows: &[RawRow]) -> Result<Vec<FileRecord>, NormalizeError> {
    rows.iter()
        .enumerate()
        .map(|(row, raw)| normalize_row(row, raw))
        .collect()
}

/// 规范化单行
pub fn normalize_row(row: usize, raw: &RawRow) -> Result<FileRecord, NormalizeError> {
    if raw.file_name.is_empty() {
        return Err(NormalizeError::EmptyFileName { row });
    }

    let uniform_size = units::to_bytes(&raw.size).map_err(|source| NormalizeError::MalformedSize {
        row,
        size: raw.size.clone(),
        source,
    })?;

    Ok(FileRecord {
        file_name: raw.file_name.clone(),
        file_path: strip_file_name(&raw.file_path, &raw.file_name),
        size: raw.size.clone(),
        file_extension: extension_of(&raw.file_name).to_string(),
        uniform_size,
    })
}

/// 最后一个 '.' 之后的文本，没有 '.' 时返回空串
pub fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
}

/// 删除路径中第一次出现的文件名（按子串删除，不识别路径分段）
pub fn strip_file_name(file_path: &str, file_name: &str) -> String {
    file_path.replacen(file_name, "", 1)
}
