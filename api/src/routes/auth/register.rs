use actix_web::{web, HttpResponse};

use at_core::{IdentityGateway, RegistrationRequest};
use at_shared::ErrorResponse;

use super::AppState;
use crate::dto::auth::RegistrationResponse;
use crate::handlers::error::ApiError;

/// Handler for POST /auth/register
///
/// Answers 201 with the upstream `user_id` when one was returned, 400 on any
/// relay failure, 422 on an invalid body.
pub async fn register<G>(
    state: web::Data<AppState<G>>,
    request: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, ApiError>
where
    G: IdentityGateway + 'static,
{
    let result = state.relay.register_user(&request).await?;

    if !result.success {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(result.message)));
    }

    Ok(HttpResponse::Created().json(RegistrationResponse::from(result)))
}
