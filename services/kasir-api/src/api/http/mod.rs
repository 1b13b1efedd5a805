//! HTTP 接口

mod category_handler;
mod extract;
mod health;
mod openapi;
mod product_handler;
mod routes;

pub use extract::{IdPath, JsonBody, ListQuery};
pub use openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
pub use routes::{AppState, router};
