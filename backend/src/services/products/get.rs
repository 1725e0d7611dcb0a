use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::storage::Database;

pub async fn process(
    product_id: web::Path<i64>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let product = db.get_product(product_id.into_inner())?;
    Ok(HttpResponse::Ok().json(product))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::product::Product;

    use crate::services::products::configure_routes;
    use crate::storage::testing::seeded_database;

    #[actix_web::test]
    async fn known_and_unknown_ids() {
        let (_dir, db) = seeded_database();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/products/2").to_request();
        let product: Product = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product.id, 2);

        let req = test::TestRequest::get().uri("/products/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
