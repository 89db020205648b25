//! Validation utilities for the Warren API.
//!
//! Every operation validates shape before any store access. Failures are
//! rendered through `ApiError`, which keeps the body-as-description wire
//! contract; deciding how a rejection looks on the wire stays out of the
//! domain layer.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::board::{BOARD_MAX_LEN, BOARD_MIN_LEN};
use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// Deserializes the body and runs the DTO's `validator` rules; on failure
/// the handler never runs and the validation description is sent back.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::text(format!("invalid request body: {e}")))?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

/// Validate a board name from the request path.
pub fn validate_board(board: &str) -> Result<(), ApiError> {
    let len = board.chars().count();
    if len < BOARD_MIN_LEN || len > BOARD_MAX_LEN {
        return Err(ApiError::text(format!(
            "board must be between {BOARD_MIN_LEN} and {BOARD_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Parse an identifier field, rejecting anything that is not in the store's
/// identifier format.
pub fn parse_id(value: &str, field: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value).map_err(|_| ApiError::text(format!("{field} must be a valid id")))
}
