use actix_web::{web, HttpResponse};

use at_core::{IdentityGateway, LoginRequest};
use at_shared::ErrorResponse;

use super::AppState;
use crate::dto::auth::LoginResponse;
use crate::handlers::error::ApiError;

/// Handler for POST /auth/login
///
/// Any relay failure, credential or transport alike, answers 401.
pub async fn login<G>(
    state: web::Data<AppState<G>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    G: IdentityGateway + 'static,
{
    let result = state.relay.login_user(&request).await?;

    if !result.success {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new(result.message)));
    }

    Ok(HttpResponse::Ok().json(LoginResponse::from(result)))
}
