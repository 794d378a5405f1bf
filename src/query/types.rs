// query/types.rs - 查询相关类型定义
//! 定义查询变体和大小比较条件

use serde::{Deserialize, Serialize};
use std::fmt;

/// 大小比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeOperator {
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl SizeOperator {
    /// 按匹配优先级排列：两字符运算符必须先于其单字符前缀检查
    pub const PRECEDENCE: [SizeOperator; 5] = [
        SizeOperator::Equal,
        SizeOperator::LessOrEqual,
        SizeOperator::LessThan,
        SizeOperator::GreaterOrEqual,
        SizeOperator::GreaterThan,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            SizeOperator::Equal => "==",
            SizeOperator::LessThan => "<",
            SizeOperator::LessOrEqual => "<=",
            SizeOperator::GreaterThan => ">",
            SizeOperator::GreaterOrEqual => ">=",
        }
    }

    /// 计算 `lhs <op> rhs`
    pub fn matches(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            SizeOperator::Equal => lhs == rhs,
            SizeOperator::LessThan => lhs < rhs,
            SizeOperator::LessOrEqual => lhs <= rhs,
            SizeOperator::GreaterThan => lhs > rhs,
            SizeOperator::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl fmt::Display for SizeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 解析后的大小条件，如 ">=2M" -> (>=, 2_000_000)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeQuery {
    pub operator: SizeOperator,
    /// 统一后的字节数
    pub bytes: f64,
}

/// 一次查询请求（对应表单里的四个搜索框）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "query", rename_all = "snake_case")]
pub enum SearchQuery {
    /// 文件名包含
    ByName(String),
    /// 路径包含
    ByPath(String),
    /// 扩展名精确匹配
    ByExtension(String),
    /// 大小比较，如 "<=200K"
    BySize(String),
}

impl SearchQuery {
    /// 用户输入的原始文本
    pub fn text(&self) -> &str {
        match self {
            SearchQuery::ByName(text)
            | SearchQuery::ByPath(text)
            | SearchQuery::ByExtension(text)
            | SearchQuery::BySize(text) => text,
        }
    }
}
