//! OpenAPI 文档与 Swagger UI

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{category_handler, health, product_handler};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kasir API",
        version = "1.0",
        description = "A simple POS (Point of Sale) API."
    ),
    paths(
        health::health,
        health::ready,
        category_handler::list_categories,
        category_handler::create_category,
        category_handler::get_category,
        category_handler::update_category,
        category_handler::delete_category,
        product_handler::list_products,
        product_handler::create_product,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
    ),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "categories", description = "Category management"),
        (name = "products", description = "Product management")
    )
)]
pub struct ApiDoc;

/// Swagger UI，同时提供 OpenAPI JSON
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
