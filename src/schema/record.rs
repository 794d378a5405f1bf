// schema/record.rs - 记录结构定义
//! 定义 CSV 原始行和规范化后的文件记录

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::*;

/// CSV 中的一行原始数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// 文件名（含扩展名）
    #[serde(rename = "FileName")]
    pub file_name: String,
    /// 文件路径（末尾带着文件名）
    #[serde(rename = "FilePath")]
    pub file_path: String,
    /// 大小简写，如 "2M"
    #[serde(rename = "Size")]
    pub size: String,
}

impl RawRow {
    pub fn new(
        file_name: impl Into<String>,
        file_path: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
            size: size.into(),
        }
    }
}

/// 规范化后的文件记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// 文件名
    pub file_name: String,
    /// 目录部分（已去掉文件名）
    pub file_path: String,
    /// CSV 里给出的原始大小字符串
    pub size: String,
    /// 最后一个 '.' 之后的部分，没有 '.' 时为空
    pub file_extension: String,
    /// 统一后的字节数
    pub uniform_size: f64,
}

impl FileRecord {
    /// 取文本字段的值
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FileName => &self.file_name,
            TextField::FilePath => &self.file_path,
            TextField::FileExtension => &self.file_extension,
            TextField::Size => &self.size,
        }
    }

    /// 取数值字段的值
    pub fn number(&self, field: NumericField) -> f64 {
        match field {
            NumericField::UniformSize => self.uniform_size,
        }
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ---- {} ---- {}", self.file_name, self.file_path, self.size)
    }
}

/// 可做包含/相等过滤的文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextField {
    FileName,
    FilePath,
    FileExtension,
    Size,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::FileName => COLUMN_FILE_NAME,
            TextField::FilePath => COLUMN_FILE_PATH,
            TextField::FileExtension => FIELD_FILE_EXTENSION,
            TextField::Size => COLUMN_SIZE,
        }
    }
}

/// 可做比较过滤的数值字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    UniformSize,
}

impl NumericField {
    pub fn name(&self) -> &'static str {
        match self {
            NumericField::UniformSize => FIELD_UNIFORM_SIZE,
        }
    }
}
