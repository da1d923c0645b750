//! CRUD handlers shared by every record kind.
//!
//! Content blocks, beliefs and meetings expose the same route shape, so the
//! handlers are written once and instantiated per kind in `routes.rs`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde::Serialize;

use super::extract::{EntityId, RequestSchema, ValidatedJson};
use super::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::models::{Belief, ContentBlock, Meeting};
use crate::store::table::{Record, Table};
use crate::store::ContentStore;

/// A record kind served over HTTP.
pub trait Collection: Record + Serialize {
    fn table(store: &ContentStore) -> &Table<Self>;
}

impl Collection for ContentBlock {
    fn table(store: &ContentStore) -> &Table<Self> {
        &store.content
    }
}

impl Collection for Belief {
    fn table(store: &ContentStore) -> &Table<Self> {
        &store.beliefs
    }
}

impl Collection for Meeting {
    fn table(store: &ContentStore) -> &Table<Self> {
        &store.meetings
    }
}

/// Mount list/active/get/create/update/delete for `R` under `base`.
/// `{base}/active` is a static segment and wins over `{base}/{id}`.
pub fn collection_routes<R>(base: &str) -> Router<AppState>
where
    R: Collection,
    R::Insert: RequestSchema,
    R::Patch: RequestSchema,
{
    collection_routes_with::<R>(base, get(get_one::<R>))
}

/// Same as [`collection_routes`] but with a caller-supplied GET for
/// `{base}/{id}`. PUT and DELETE on that path stay the generic handlers.
pub fn collection_routes_with<R>(base: &str, item_get: MethodRouter<AppState>) -> Router<AppState>
where
    R: Collection,
    R::Insert: RequestSchema,
    R::Patch: RequestSchema,
{
    Router::new()
        .route(base, get(list::<R>).post(create::<R>))
        .route(&format!("{}/active", base), get(list_active::<R>))
        .route(
            &format!("{}/{{id}}", base),
            item_get.put(update::<R>).delete(delete::<R>),
        )
}

/// GET {base}: every row, ordered by sort order.
pub async fn list<R: Collection>(State(state): State<AppState>) -> Json<Vec<R>> {
    Json(R::table(&state.store).all())
}

/// GET {base}/active: active rows only, same ordering.
pub async fn list_active<R: Collection>(State(state): State<AppState>) -> Json<Vec<R>> {
    Json(R::table(&state.store).active())
}

/// GET {base}/{id}. A segment that is not an integer names no row, so it
/// is a 404 like any other miss.
pub async fn get_one<R: Collection>(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<R>, ApiError> {
    let found = raw
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| R::table(&state.store).get(id));

    found.map(Json).ok_or_else(|| {
        tracing::debug!(kind = R::KIND, id = %raw, "Lookup missed");
        ApiError::NotFound { kind: R::KIND }
    })
}

/// POST {base}: 201 with the stored row.
pub async fn create<R>(
    State(state): State<AppState>,
    ValidatedJson(insert): ValidatedJson<R::Insert>,
) -> (StatusCode, Json<R>)
where
    R: Collection,
    R::Insert: RequestSchema,
{
    let row = R::table(&state.store).create(insert);
    tracing::info!(kind = R::KIND, id = row.id(), "Created");
    (StatusCode::CREATED, Json(row))
}

/// PUT {base}/{id}: merge the supplied fields into the row.
pub async fn update<R>(
    State(state): State<AppState>,
    EntityId(id, _): EntityId<R>,
    ValidatedJson(patch): ValidatedJson<R::Patch>,
) -> Result<Json<R>, ApiError>
where
    R: Collection,
    R::Patch: RequestSchema,
{
    match R::table(&state.store).update(id, patch) {
        Some(row) => {
            tracing::info!(kind = R::KIND, id, "Updated");
            Ok(Json(row))
        }
        None => {
            tracing::debug!(kind = R::KIND, id, "Update target missing");
            Err(ApiError::NotFound { kind: R::KIND })
        }
    }
}

/// DELETE {base}/{id}
pub async fn delete<R: Collection>(
    State(state): State<AppState>,
    EntityId(id, _): EntityId<R>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !R::table(&state.store).delete(id) {
        tracing::debug!(kind = R::KIND, id, "Delete target missing");
        return Err(ApiError::NotFound { kind: R::KIND });
    }

    tracing::info!(kind = R::KIND, id, "Deleted");
    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", R::KIND),
    }))
}
