// api/mod.rs - API 模块
//! 表单/JSON 请求类型、响应类型和 HTML 页面渲染

pub mod request;
pub mod response;
pub mod html;

pub use request::*;
pub use response::*;
