//! 领域层：实体、请求载荷与仓储接口

pub mod category;
pub mod product;
pub mod repository;

pub use category::*;
pub use product::*;
pub use repository::*;

use serde::{Deserialize, Deserializer};

/// 请求体字段为 JSON `null` 时按缺省值处理，与字段缺失一致
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
