//! 应用层服务

mod category_service;
mod product_service;

pub use category_service::*;
pub use product_service::*;
