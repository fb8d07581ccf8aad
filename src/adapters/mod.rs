//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (HS256 JWT, mock)
//! - `http` - Axum router, handlers and middleware
//! - `memory` - In-memory store for tests and local runs
//! - `postgres` - Readers over the platform database

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
