//! Wire model shared by the AvaliaAqui client and the product/feedback service.

pub mod api;
pub mod model;
