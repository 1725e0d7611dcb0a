//! HTTP routes of the product/feedback service.
//!
//! - `products`: read-only catalogue (`GET /products`, `GET /products/{id}`).
//! - `evaluations`: feedback records (`POST /evaluations`, `GET /evaluations`).
//! - `client`: the embedded web client, used as the default service.

pub mod client;
pub mod evaluations;
pub mod products;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(products::configure_routes())
        .service(evaluations::configure_routes());
}
