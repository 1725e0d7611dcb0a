use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ServiceError;
use crate::storage::Database;

#[derive(Deserialize)]
pub struct EvaluationFilter {
    #[serde(rename = "productId")]
    product_id: Option<i64>,
}

pub async fn process(
    filter: web::Query<EvaluationFilter>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let records = db.list_evaluations(filter.product_id)?;
    Ok(HttpResponse::Ok().json(records))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::feedback::{Experience, FeedbackRecord};

    use crate::services::evaluations::configure_routes;
    use crate::storage::testing::seeded_database;

    #[actix_web::test]
    async fn filters_by_product() {
        let (_dir, db) = seeded_database();
        for (id, product_id) in [(1, 1), (2, 2), (3, 1)] {
            db.insert_evaluation(&FeedbackRecord {
                id,
                product_id,
                name: "Eva".to_string(),
                email: "eva@example.com".to_string(),
                feedback: "Bom custo-benefício".to_string(),
                experience: Experience::Good,
                recommend: false,
            })
            .unwrap();
        }

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/evaluations").to_request();
        let all: Vec<FeedbackRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);

        let req = test::TestRequest::get()
            .uri("/evaluations?productId=1")
            .to_request();
        let first: Vec<FeedbackRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
