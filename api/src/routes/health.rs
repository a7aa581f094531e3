use actix_web::HttpResponse;
use sc_shared::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "shopping-cart-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
