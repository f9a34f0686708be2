//! HTTP carrier for the AromaTech auth relay
//!
//! Exposes the three account operations over JSON and wires the relay
//! service, CORS, request tracing, and error bodies together.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::auth::AppState;
