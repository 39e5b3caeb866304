//! Request middleware and extractors.
//!
//! The only cross-cutting concern here is authentication: handlers that need
//! an identity take an [`auth::AuthUser`] argument, which reads the `token`
//! cookie, verifies it, and exposes the claims. Guarded routes never run
//! without a valid token.

pub mod auth;
