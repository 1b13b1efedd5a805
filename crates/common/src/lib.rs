//! common - 通用类型：分页与统一响应封装

pub mod response;
pub mod types;

pub use response::*;
pub use types::*;
