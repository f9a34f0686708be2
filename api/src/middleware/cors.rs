//! CORS middleware configuration for cross-origin requests.
//!
//! Development configurations accept any origin; otherwise only the origins
//! listed in [`CorsConfig::allowed_origins`] are let through.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tracing::info;

use at_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    let any_origin = config.allow_any_origin || config.allowed_origins.iter().any(|o| o.trim() == "*");
    if any_origin {
        info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            info!(origin = %origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    fn restricted() -> CorsConfig {
        CorsConfig::restricted(["https://app.example.com", " "])
    }

    #[actix_web::test]
    async fn test_listed_origin_is_echoed() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&restricted()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://app.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.example.com"
        );
    }

    #[actix_web::test]
    async fn test_unlisted_origin_gets_no_allow_header() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&restricted()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        match resp {
            Ok(resp) => assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none()),
            Err(err) => assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST),
        }
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::development()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some());
    }
}
