use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::extract::ValidatedJson;
use crate::state::AppState;
use crate::store::models::ContactForm;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
    pub id: i64,
}

/// POST /api/contact: accept a message from the public contact form.
pub async fn submit(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<ContactForm>,
) -> Json<ContactResponse> {
    let submission = state.store.contacts.record(form);
    tracing::info!(
        id = submission.id,
        has_phone = submission.phone.is_some(),
        "Contact form submission received"
    );

    Json(ContactResponse {
        message: "Message received successfully".to_string(),
        id: submission.id,
    })
}
