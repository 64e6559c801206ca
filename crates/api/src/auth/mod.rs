//! Account primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`owner`] -- startup resolution of the account that owns new collections.

pub mod owner;
pub mod password;
