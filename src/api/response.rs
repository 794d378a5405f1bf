// api/response.rs - 响应类型
//! 定义查询结果的结构化响应类型

use serde::{Deserialize, Serialize};

use crate::engine::Outcome;
use crate::schema::FileRecord;

/// 一次请求的完整响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// 命中的记录
    pub entries: Vec<EntryResponse>,

    /// 命中数量
    pub total: usize,

    /// 数据库/导入状态
    pub load_status: String,

    /// 查询状态（只有执行了查询才有）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_status: Option<String>,
}

impl SearchResponse {
    pub fn from_outcome(outcome: Outcome, precision: usize) -> Self {
        let entries: Vec<EntryResponse> = outcome
            .entries
            .iter()
            .map(|record| EntryResponse::new(record, precision))
            .collect();

        Self {
            total: entries.len(),
            entries,
            load_status: outcome.load_status,
            query_status: outcome.query_status,
        }
    }
}

/// 单条记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryResponse {
    pub file_name: String,
    pub file_path: String,
    /// CSV 中的原始大小
    pub size: String,
    pub file_extension: String,
    /// 统一字节数
    pub uniform_size: f64,
    /// 人类可读大小
    pub size_display: String,
}

impl EntryResponse {
    pub fn new(record: &FileRecord, precision: usize) -> Self {
        Self {
            file_name: record.file_name.clone(),
            file_path: record.file_path.clone(),
            size: record.size.clone(),
            file_extension: record.file_extension.clone(),
            uniform_size: record.uniform_size,
            size_display: format_file_size(record.uniform_size, precision),
        }
    }
}

/// 十进制单位的人类可读大小
pub fn format_file_size(bytes: f64, precision: usize) -> String {
    const KB: f64 = 1e3;
    const MB: f64 = 1e6;
    const GB: f64 = 1e9;

    if bytes >= GB {
        format!("{:.*} GB", precision, bytes / GB)
    } else if bytes >= MB {
        format!("{:.*} MB", precision, bytes / MB)
    } else if bytes >= KB {
        format!("{:.*} KB", precision, bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
