// schema/mod.rs - 记录结构定义模块
//! 定义导入记录的结构和字段名

mod record;
pub mod fields;

pub use record::*;
pub use fields::*;
