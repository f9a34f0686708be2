use actix_web::{web, HttpResponse};

use at_core::{IdentityGateway, VerificationCodeRequest};
use at_shared::ErrorResponse;

use super::AppState;
use crate::dto::auth::VerificationCodeResponse;
use crate::handlers::error::ApiError;

/// Handler for POST /auth/request-verification-code
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "type": 0 }
/// ```
///
/// # Responses
///
/// - 200 `{"success": true, "message": "...", "email": "user@example.com"}`
/// - 400 `{"success": false, "message": "..."}` when upstream refuses or is unreachable
/// - 422 when the email is malformed
pub async fn request_verification_code<G>(
    state: web::Data<AppState<G>>,
    request: web::Json<VerificationCodeRequest>,
) -> Result<HttpResponse, ApiError>
where
    G: IdentityGateway + 'static,
{
    let request = request.into_inner();
    let result = state.relay.request_verification_code(&request).await?;

    if !result.success {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(result.message)));
    }

    Ok(HttpResponse::Ok().json(VerificationCodeResponse {
        success: true,
        message: result.message,
        email: request.email,
    }))
}
