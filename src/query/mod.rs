// query/mod.rs - 查询模块
//! 查询类型定义和大小条件解析

mod parser;
pub mod types;

pub use parser::*;
pub use types::*;
