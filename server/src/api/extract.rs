use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use validator::Validate;

use crate::error::ApiError;
use crate::store::models::{
    BeliefPatch, ContactForm, ContentBlockPatch, InsertBelief, InsertContentBlock, InsertMeeting,
    MeetingPatch,
};
use crate::store::table::Record;

/// A request body type with validation rules and the message reported when
/// it is rejected.
pub trait RequestSchema: DeserializeOwned + Validate + Send + 'static {
    const INVALID_MESSAGE: &'static str;
}

impl RequestSchema for InsertContentBlock {
    const INVALID_MESSAGE: &'static str = "Invalid content data";
}

impl RequestSchema for ContentBlockPatch {
    const INVALID_MESSAGE: &'static str = "Invalid content data";
}

impl RequestSchema for InsertBelief {
    const INVALID_MESSAGE: &'static str = "Invalid belief data";
}

impl RequestSchema for BeliefPatch {
    const INVALID_MESSAGE: &'static str = "Invalid belief data";
}

impl RequestSchema for InsertMeeting {
    const INVALID_MESSAGE: &'static str = "Invalid meeting data";
}

impl RequestSchema for MeetingPatch {
    const INVALID_MESSAGE: &'static str = "Invalid meeting data";
}

impl RequestSchema for ContactForm {
    const INVALID_MESSAGE: &'static str = "Invalid form data";
}

/// JSON body that has been decoded and passed its validation rules.
/// Decode failures and rule violations both reject with 400.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestSchema,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::malformed_body(T::INVALID_MESSAGE, rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::validation(T::INVALID_MESSAGE, &errors))?;

        Ok(ValidatedJson(value))
    }
}

/// Numeric `{id}` path segment for a record kind. Anything that does not
/// parse as an integer rejects with 400 naming the kind.
pub struct EntityId<R>(pub i64, pub PhantomData<fn() -> R>);

impl<R> EntityId<R> {
    pub fn new(id: i64) -> Self {
        EntityId(id, PhantomData)
    }
}

impl<S, R> FromRequestParts<S> for EntityId<R>
where
    S: Send + Sync,
    R: Record,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || ApiError::InvalidId { kind: R::KIND };

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        raw.trim()
            .parse::<i64>()
            .map(EntityId::new)
            .map_err(|_| invalid())
    }
}
