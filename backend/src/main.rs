mod config;
mod error;
mod services;
mod storage;

use crate::config::Settings;
use crate::storage::Database;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env();
    let url = settings.url();

    let database = Database::new(&settings.database_path);
    database.migrate().map_err(std::io::Error::other)?;
    match database.seed_from_file(&settings.seed_path) {
        Ok(report) => info!(
            "Seeded {} products and {} evaluations from {}",
            report.products,
            report.evaluations,
            settings.seed_path.display()
        ),
        Err(e) => warn!("Seeding skipped: {}", e),
    }

    if settings.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);

    let database = web::Data::new(database);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(database.clone())
            .configure(services::configure)
            .default_service(web::route().to(services::client::process))
    })
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}
