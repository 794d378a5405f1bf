// schema/fields.rs - 字段名常量定义
//! 统一管理 CSV 列名和记录字段名，避免魔法字符串

/// CSV 列：文件名
pub const COLUMN_FILE_NAME: &str = "FileName";
/// CSV 列：文件路径（包含文件名）
pub const COLUMN_FILE_PATH: &str = "FilePath";
/// CSV 列：原始大小字符串
pub const COLUMN_SIZE: &str = "Size";

/// 导入时必须存在的列
pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_FILE_NAME, COLUMN_FILE_PATH, COLUMN_SIZE];

/// 派生字段：扩展名
pub const FIELD_FILE_EXTENSION: &str = "FileExtension";
/// 派生字段：统一字节数
pub const FIELD_UNIFORM_SIZE: &str = "UniformSize";
