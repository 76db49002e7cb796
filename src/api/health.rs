use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::services::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub storage: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and storage are healthy", body = HealthResponse),
        (status = 503, description = "Storage did not answer a ping", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    let (status, storage) = match store.ping().await {
        Ok(()) => ("healthy", "up".to_string()),
        Err(e) => {
            log::warn!("⚠️ Health check: storage unreachable: {}", e);
            ("unhealthy", e.to_string())
        }
    };

    let body = HealthResponse {
        status: status.to_string(),
        service: "user-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
        timestamp: chrono::Utc::now().timestamp(),
    };

    if status == "healthy" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
