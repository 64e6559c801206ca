//! Shared response payloads that are not entity rows.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement, used where an operation has no row
/// left to return (e.g. after a delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
