//! Application factory
//!
//! Builds the Actix-web application around shared relay state. Used by the
//! server binary and by the integration tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use at_core::IdentityGateway;
use at_shared::config::CorsConfig;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::{self, auth::AppState};

/// Create and configure the application with all dependencies
pub fn create_app<G>(
    app_state: web::Data<AppState<G>>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    G: IdentityGateway + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Last wrap runs first: trace every request, CORS included
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .configure(routes::health::configure)
        .configure(routes::auth::configure::<G>)
        .default_service(web::route().to(not_found))
}
