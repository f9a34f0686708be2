//! reqwest implementation of the identity gateway

use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;

use at_core::domain::{
    LoginRequest, LoginResult, RegistrationRequest, RegistrationResult, UpstreamEnvelope,
    VerificationCodeRequest, VerificationCodeResult,
};
use at_core::errors::UpstreamFailure;
use at_core::services::relay::normalize;
use at_core::services::relay::{IdentityGateway, UpstreamOperation, UpstreamOutcome};
use at_shared::config::UpstreamConfig;
use at_shared::utils::mask::mask_email;

use crate::InfrastructureError;

/// Validate an upstream root URL and strip trailing slashes
///
/// # Errors
/// Returns `InfrastructureError::Config` if the URL does not parse, is not
/// http(s), or has no host.
pub fn normalize_base_url(raw: &str) -> Result<String, InfrastructureError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let url = Url::parse(trimmed).map_err(|e| {
        InfrastructureError::Config(format!("invalid upstream base URL '{}': {}", raw, e))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(InfrastructureError::Config(format!(
                "unsupported upstream URL scheme '{}'",
                other
            )))
        }
    }

    if url.host_str().is_none() {
        return Err(InfrastructureError::Config(format!(
            "upstream base URL '{}' has no host",
            raw
        )));
    }

    Ok(trimmed.to_string())
}

/// Client for the upstream identity API
///
/// Holds an immutable base URL and a pooled HTTP client; share one instance
/// behind an `Arc` across all request handlers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a client for `base_url` bounding every call by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InfrastructureError> {
        let base_url = normalize_base_url(base_url)?;
        // A redirected POST is reported as the 3xx it is, never replayed
        let http = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        info!(
            base_url = %base_url,
            timeout_ms = timeout.as_millis() as u64,
            "Upstream identity client initialized"
        );

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    /// Create from the shared upstream configuration
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, InfrastructureError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of an operation's fixed path
    pub fn endpoint(&self, operation: UpstreamOperation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    /// Perform the single POST of an operation and classify what came back
    async fn post<B>(&self, operation: UpstreamOperation, body: &B) -> UpstreamOutcome
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.endpoint(operation);
        let span = info_span!(
            "upstream.call",
            operation = %operation,
            http.method = "POST",
            url = %url
        );

        self.exchange(&url, body).instrument(span).await
    }

    async fn exchange<B>(&self, url: &str, body: &B) -> UpstreamOutcome
    where
        B: Serialize + ?Sized + Sync,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        info!(status = status.as_u16(), "Upstream responded");

        if !status.is_success() {
            warn!(status = status.as_u16(), "Upstream returned an error status");
            return Err(UpstreamFailure::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(classify_transport_error)?;
        debug!(body_len = text.len(), "Upstream body received");

        UpstreamEnvelope::from_json(&text).map_err(|failure| {
            warn!(error = %failure, "Upstream body could not be interpreted");
            failure
        })
    }
}

/// Builder errors (e.g. an unserializable body) are ours; everything else
/// happened on the wire.
fn classify_transport_error(error: reqwest::Error) -> UpstreamFailure {
    if error.is_builder() {
        warn!(error = %error, "Upstream request could not be built");
        return UpstreamFailure::Unexpected(error.to_string());
    }

    if error.is_timeout() {
        warn!(error = %error, "Upstream call timed out");
    } else {
        warn!(error = %error, "Upstream call failed in transport");
    }
    UpstreamFailure::Network(error.to_string())
}

#[async_trait]
impl IdentityGateway for UpstreamClient {
    async fn request_verification_code(
        &self,
        request: &VerificationCodeRequest,
    ) -> VerificationCodeResult {
        info!(
            email = %mask_email(&request.email),
            code_type = request.code_type,
            "Requesting verification code"
        );
        let outcome = self.post(UpstreamOperation::VerificationCode, request).await;
        normalize::verification_code_result(outcome)
    }

    async fn register_user(&self, request: &RegistrationRequest) -> RegistrationResult {
        info!(email = %mask_email(&request.email), "Registering user");
        let outcome = self.post(UpstreamOperation::Registration, request).await;
        normalize::registration_result(outcome)
    }

    async fn login_user(&self, request: &LoginRequest) -> LoginResult {
        info!(attempt = %request.loggable(), "Logging in user");
        let outcome = self.post(UpstreamOperation::Login, request).await;
        normalize::login_result(outcome)
    }
}
