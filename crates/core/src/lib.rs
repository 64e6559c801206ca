//! Shared domain types for the palette service.
//!
//! Nothing in this crate touches the database or HTTP; both `palette-db`
//! and `palette-api` build on these definitions.

pub mod auth;
pub mod error;
pub mod types;
