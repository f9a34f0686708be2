//! Route registration

pub mod auth;
pub mod health;
