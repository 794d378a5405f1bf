// engine/mod.rs - 查询控制层
//! 把导入/查询请求分派到记录存储，并生成状态文本

pub mod core;
pub mod builder;

pub use core::*;
pub use builder::*;
