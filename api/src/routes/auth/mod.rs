//! Account route handlers
//!
//! - Requesting an emailed verification code
//! - Registering with that code
//! - Logging in

pub mod login;
pub mod register;
pub mod request_code;

use actix_web::web;

use at_core::{AuthRelayService, IdentityGateway};

/// Application state that holds shared services
pub struct AppState<G: IdentityGateway> {
    pub relay: AuthRelayService<G>,
}

impl<G: IdentityGateway> AppState<G> {
    pub fn new(relay: AuthRelayService<G>) -> Self {
        Self { relay }
    }
}

/// Register the `/auth` scope
pub fn configure<G: IdentityGateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route(
                "/request-verification-code",
                web::post().to(request_code::request_verification_code::<G>),
            )
            .route("/register", web::post().to(register::register::<G>))
            .route("/login", web::post().to(login::login::<G>)),
    );
}
