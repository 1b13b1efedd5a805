//! Kasir API - 收银系统后端
//!
//! 分层结构：HTTP 接口 → 应用服务 → 仓储 → PostgreSQL

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
