//! Service root and liveness endpoints

use actix_web::{web, HttpResponse};

use at_shared::{HealthResponse, WelcomeResponse};

/// Product name shown by the root endpoint
pub const SERVICE_NAME: &str = "AromaTech";

/// Service identifier reported by the health check
pub const SERVICE_ID: &str = "aromatech-api";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Handler for GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse::new(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_ID, env!("CARGO_PKG_VERSION")))
}
