use actix_web::{web, HttpResponse};
use common::model::feedback::FeedbackRecord;
use log::info;

use crate::error::ServiceError;
use crate::storage::Database;

/// Stores the record exactly as sent. Presence of fields is the client's job;
/// the JSON extractor already rejects records with missing keys.
pub async fn process(
    payload: web::Json<FeedbackRecord>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let record = payload.into_inner();
    db.insert_evaluation(&record)?;
    info!(
        "Stored evaluation {} for product {}",
        record.id, record.product_id
    );
    Ok(HttpResponse::Created().json(record))
}
