//! API error handling for the Warren web surface.
//!
//! The wire contract is unusual on purpose: every outcome, success or
//! failure, is returned with a successful status and the failure description
//! as the plain response body. Clients interpret the body, not the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::WarrenError;

/// API error type carrying the body to send back.
#[derive(Debug)]
pub struct ApiError {
    body: String,
}

impl ApiError {
    /// Create an error with the given response body.
    pub fn text(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The response body for this error.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Create an error from validator failures, rendering the field
    /// messages as one description.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {field}"))
                })
            })
            .collect();

        // field_errors() iterates in hash order
        messages.sort();
        Self::text(messages.join("; "))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

impl std::error::Error for ApiError {}

impl From<WarrenError> for ApiError {
    fn from(err: WarrenError) -> Self {
        match &err {
            WarrenError::Validation(msg) => ApiError::text(msg.clone()),
            WarrenError::ThreadNotFound => ApiError::text("not found"),
            WarrenError::ReplyNotFound => ApiError::text("reply not found"),
            WarrenError::IncorrectPassword => ApiError::text("incorrect password"),
            _ => {
                tracing::error!("store failure: {err}");
                // Raw message in the body, matching the observed upstream
                // behavior (a documented information leak).
                ApiError::text(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, max = 15, message = "name must be between 3 and 15 characters"))]
        name: String,
    }

    #[test]
    fn test_from_warren_error_bodies() {
        assert_eq!(ApiError::from(WarrenError::ThreadNotFound).body(), "not found");
        assert_eq!(
            ApiError::from(WarrenError::ReplyNotFound).body(),
            "reply not found"
        );
        assert_eq!(
            ApiError::from(WarrenError::IncorrectPassword).body(),
            "incorrect password"
        );
        assert_eq!(
            ApiError::from(WarrenError::Validation("bad field".into())).body(),
            "bad field"
        );
    }

    #[test]
    fn test_store_failure_leaks_message() {
        let err = ApiError::from(WarrenError::Database("disk I/O error".into()));
        assert_eq!(err.body(), "database error: disk I/O error");
    }

    #[test]
    fn test_from_validation_errors_uses_message() {
        let sample = Sample { name: "ab".into() };
        let errors = sample.validate().unwrap_err();
        let err = ApiError::from_validation_errors(errors);
        assert_eq!(err.body(), "name must be between 3 and 15 characters");
    }
}
