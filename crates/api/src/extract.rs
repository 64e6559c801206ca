//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Path` extractors answer failures with plain-text
//! bodies. These wrappers keep the status code axum picks but render the
//! standard JSON error body instead.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
