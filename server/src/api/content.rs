use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::models::ContentBlock;
use crate::store::table::Record;

/// GET /api/cms/content/{id_or_type}: one block when the segment is an
/// integer id, otherwise the active blocks of that page section.
pub async fn get_block_or_type(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(id) = segment.trim().parse::<i64>() else {
        return Ok(Json(state.store.content_by_type(&segment)).into_response());
    };

    match state.store.content.get(id) {
        Some(block) => Ok(Json(block).into_response()),
        None => {
            tracing::debug!(kind = ContentBlock::KIND, id, "Lookup missed");
            Err(ApiError::NotFound {
                kind: ContentBlock::KIND,
            })
        }
    }
}

/// GET /api/cms/content/type/{type}: active blocks for one page section.
/// An unknown type is an empty list, not a 404.
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Json<Vec<ContentBlock>> {
    Json(state.store.content_by_type(&kind))
}
