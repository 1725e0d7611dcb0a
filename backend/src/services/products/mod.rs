mod get;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::api::PRODUCTS_PATH;

/// Routes under `/products`.
///
/// * `GET /products` returns every product as a JSON array (possibly empty).
/// * `GET /products/{id}` returns one product, or `404` when unknown.
pub fn configure_routes() -> Scope {
    scope(PRODUCTS_PATH)
        .route("", get().to(list::process))
        .route("/{product_id}", get().to(get::process))
}
