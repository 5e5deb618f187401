//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation, validation, and refresh-token helpers.
//! - [`oauth`] -- OAuth provider registry and code exchange.

pub mod jwt;
pub mod oauth;
pub mod password;
