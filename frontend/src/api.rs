//! HTTP calls to the product/feedback service.
//!
//! The client makes exactly two kinds of request, both built from the
//! configured base URL (`AppConfig`) and the paths in `common::api`:
//!
//! - `GET {base}/products` from the product list, once per mount.
//! - `POST {base}/evaluations` from the feedback form, once per valid submit.
//!
//! Neither request is retried, cancelled or given a timeout beyond the
//! browser's own. Callers collapse every [`ApiError`] into one generic alert;
//! the variants only exist for the console log.

use common::model::feedback::FeedbackRecord;
use common::model::product::Product;
use gloo_net::http::Request;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS)
    /// or the body could not be encoded or decoded.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The service answered outside the 2xx range.
    #[error("service answered with status {0}")]
    Status(u16),
}

/// Fetches the product catalogue.
///
/// The body is decoded straight into `Vec<Product>`; no further checks are
/// made on the values.
///
/// # Arguments
/// * `config` - Supplies the base URL, see `AppConfig::products_url`.
///
/// # Returns
/// - `Ok(products)` for a 2xx reply, possibly empty.
/// - `Err(ApiError::Status)` for any other status.
/// - `Err(ApiError::Transport)` when the request fails or the JSON does not
///   match the product shape.
pub async fn fetch_products(config: &AppConfig) -> Result<Vec<Product>, ApiError> {
    let response = Request::get(&config.products_url()).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<Vec<Product>>().await?)
}

/// Sends one feedback record.
///
/// The record is serialized as JSON with `Content-Type: application/json`.
/// Whatever the service returns in the body is ignored.
///
/// # Arguments
/// * `config` - Supplies the base URL, see `AppConfig::evaluations_url`.
/// * `record` - A complete record, as produced by `FeedbackDraft::finalize`.
///
/// # Returns
/// - `Ok(())` for any 2xx reply.
/// - `Err(ApiError::Status)` for any other status.
/// - `Err(ApiError::Transport)` when the request cannot be sent.
pub async fn submit_feedback(config: &AppConfig, record: &FeedbackRecord) -> Result<(), ApiError> {
    let response = Request::post(&config.evaluations_url())
        .header("Content-Type", "application/json")
        .json(record)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
