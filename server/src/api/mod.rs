//! HTTP handlers. Every route family validates its body against the
//! schema types in `store::models` and maps store results onto status codes.

pub mod collection;
pub mod contact;
pub mod content;
pub mod extract;

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body for successful deletes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
