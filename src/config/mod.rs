//! Configuration loaded from environment variables.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: session token secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
