mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{Config, StorageBackend};
use dotenv::dotenv;
use services::{InMemoryUserStore, MongoUserStore, UserStore};
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn cors(origins: &[String]) -> Cors {
    let cors = if origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    log::info!("🚀 Starting User Service...");

    let store: Arc<dyn UserStore> = match config.storage {
        StorageBackend::MongoDB => {
            log::info!("📊 Database: {}", config.database_name);
            let db = database::MongoDB::new(&config.database_url, &config.database_name)
                .await
                .map_err(|e| {
                    log::error!("❌ Mongo connection error: {}", e);
                    io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
                })?;
            Arc::new(MongoUserStore::new(db))
        }
        StorageBackend::Memory => {
            log::warn!("⚠️ Using in-memory storage, data is lost on shutdown");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let store_data = web::Data::from(store);
    let origins = config.cors_origins.clone();
    let bind_address = config.bind_address();

    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    let server = HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors(&origins))
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(&bind_address)?;

    log::info!("✅ || SERVER IS UP AND RUNNING || on port {}", config.port);

    server.run().await
}
