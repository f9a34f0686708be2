//! Upstream identity API adapter
//!
//! ## Features
//!
//! - One POST per operation, JSON body, bounded by a per-call timeout
//! - Base URL validated once at construction, trailing slashes stripped
//! - Transport outcome classified for the core normalizer
//! - Security: passwords and reply bodies never logged

mod client;

pub use client::{normalize_base_url, UpstreamClient};
