//! kasir-adapter-postgres - PostgreSQL 适配器

mod connection;
mod error_mapper;
mod query_metrics;

pub use connection::*;
pub use error_mapper::*;
pub use query_metrics::*;
