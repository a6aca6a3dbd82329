//! Custom Axum extractors

use std::marker::PhantomData;
use std::num::IntErrorKind;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::Resource;

/// Extract an integer primary key for resource `R` from the path.
///
/// Non-numeric ids are rejected with a JSON 400 instead of the
/// framework's plain-text rejection. Numeric ids too large for an
/// INTEGER column cannot name a stored row and are reported as a
/// missing `R`.
pub struct EntityId<R>(pub i64, pub PhantomData<R>);

impl<S, R> FromRequestParts<S> for EntityId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId {
                value: String::new(),
            })?;

        parse_id::<R>(raw).map(|id| Self(id, PhantomData))
    }
}

fn parse_id<R: Resource>(raw: String) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(ApiError::NotFound { resource: R::NAME })
            }
            _ => Err(ApiError::InvalidId { value: raw }),
        },
    }
}
