use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::storage::Database;

pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let products = db.list_products()?;
    Ok(HttpResponse::Ok().json(products))
}
