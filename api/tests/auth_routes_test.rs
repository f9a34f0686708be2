//! Integration tests for the HTTP surface, backed by a stub gateway

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web};
use async_trait::async_trait;
use serde_json::{json, Map, Value};

use at_api::{create_app, AppState};
use at_core::services::relay::normalize::messages;
use at_core::{
    AuthRelayService, IdentityGateway, LoginRequest, LoginResult, RegistrationRequest,
    RegistrationResult, VerificationCodeRequest, VerificationCodeResult,
};
use at_shared::config::CorsConfig;

const MAX_PAYLOAD: usize = 64 * 1024;

/// Gateway with fixed answers keyed on request contents
#[derive(Default)]
struct StubGateway {
    calls: AtomicUsize,
}

impl StubGateway {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityGateway for StubGateway {
    async fn request_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> VerificationCodeResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.email == "taken@example.com" {
            VerificationCodeResult::failed("Failed to send verification code: email exists")
        } else {
            VerificationCodeResult::sent(messages::CODE_SENT)
        }
    }

    async fn register_user(&self, request: &RegistrationRequest) -> RegistrationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.valid_code == "000000" {
            RegistrationResult::failed("Registration failed: verification code invalid")
        } else {
            RegistrationResult::registered(messages::REGISTERED, Some("u-1".to_string()))
        }
    }

    async fn login_user(&self, request: &LoginRequest) -> LoginResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.password == "s3cret" {
            let mut info = Map::new();
            info.insert("id".to_string(), json!(1));
            LoginResult::authenticated(messages::LOGGED_IN, Some("abc".to_string()), Some(info))
        } else {
            LoginResult::failed(messages::LOGIN_UNAUTHORIZED)
        }
    }
}

fn state(gateway: &Arc<StubGateway>) -> web::Data<AppState<StubGateway>> {
    web::Data::new(AppState::new(AuthRelayService::new(Arc::clone(gateway))))
}

fn post_json(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

#[actix_web::test]
async fn test_root_and_health() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["message"], "Welcome to AromaTech API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_request_code_success_echoes_email() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/request-verification-code",
        json!({"email": "user@example.com", "type": 0}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": messages::CODE_SENT,
            "email": "user@example.com"
        })
    );
}

#[actix_web::test]
async fn test_request_code_type_defaults_when_omitted() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json("/auth/request-verification-code", json!({"email": "user@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(gateway.calls(), 1);
}

#[actix_web::test]
async fn test_request_code_upstream_failure_is_400() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/request-verification-code",
        json!({"email": "taken@example.com", "type": 0}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("email exists"));
}

#[actix_web::test]
async fn test_invalid_email_is_422_and_never_relayed() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/request-verification-code",
        json!({"email": "not-an-email", "type": 0}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"]["email"].is_array());
    assert_eq!(gateway.calls(), 0);
}

#[actix_web::test]
async fn test_malformed_json_is_422() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"account\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid request body");
    assert!(body["errors"]["body"].is_array());
    assert_eq!(gateway.calls(), 0);
}

#[actix_web::test]
async fn test_missing_field_is_422() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/register",
        json!({"email": "user@example.com", "password": "s3cret", "username": "alice"}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(gateway.calls(), 0);
}

#[actix_web::test]
async fn test_register_success_is_201() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/register",
        json!({
            "email": "user@example.com",
            "password": "s3cret",
            "username": "alice",
            "validCode": "123456"
        }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], messages::REGISTERED);
    assert_eq!(body["user_id"], "u-1");
}

#[actix_web::test]
async fn test_register_failure_is_400() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/register",
        json!({
            "email": "user@example.com",
            "password": "s3cret",
            "username": "alice",
            "validCode": "000000"
        }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Registration failed: verification code invalid");
}

#[actix_web::test]
async fn test_empty_username_is_422() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json(
        "/auth/register",
        json!({
            "email": "user@example.com",
            "password": "s3cret",
            "username": "",
            "validCode": "123456"
        }),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["errors"]["username"].is_array());
}

#[actix_web::test]
async fn test_login_success_returns_token_and_user_info() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json("/auth/login", json!({"account": "alice", "password": "s3cret"})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token"], "abc");
    assert_eq!(body["user_info"], json!({"id": 1}));
}

#[actix_web::test]
async fn test_login_failure_is_401_without_password_echo() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let req = post_json("/auth/login", json!({"account": "alice", "password": "wrong-pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let bytes = test::read_body(resp).await;
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("wrong-pass"));

    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["message"], "Invalid username/email or password");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_get_on_post_route_is_not_relayed() {
    let gateway = Arc::new(StubGateway::default());
    let app = test::init_service(create_app(state(&gateway), &CorsConfig::development(), MAX_PAYLOAD)).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/auth/login").to_request()).await;
    assert!(resp.status().is_client_error());
    assert_eq!(gateway.calls(), 0);
}
