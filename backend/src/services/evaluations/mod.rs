mod create;
mod list;

use actix_web::web::{get, post, resource, scope};
use actix_web::Scope;
use common::api::EVALUATIONS_PATH;

/// Routes under `/evaluations`.
///
/// * `POST /evaluations` stores one `FeedbackRecord` and answers `201 Created`
///   with the stored record. A body that does not decode is a `400`, a reused
///   id a `409`.
/// * `GET /evaluations` lists stored records; `?productId=` narrows the list to
///   one product.
pub fn configure_routes() -> Scope {
    scope(EVALUATIONS_PATH)
        .service(
            resource("")
                .route(post().to(create::process))
                .route(get().to(list::process)),
        )
}
