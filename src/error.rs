use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Errors crossing the operation boundary. Every variant renders as the
/// uniform `{"success": false, "error": "..."}` body; nothing panics or
/// leaks past a handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Postgres unique-constraint violation (code 23505), e.g. duplicate email.
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(
            err,
            sqlx::Error::Database(e) if e.code().as_deref() == Some("23505")
        )
    }

    /// Serialization conflict (code 40001) under SERIALIZABLE isolation.
    pub fn is_serialization_failure(err: &sqlx::Error) -> bool {
        matches!(
            err,
            sqlx::Error::Database(e) if e.code().as_deref() == Some("40001")
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                "An internal error occurred".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "success": false, "error": error }))).into_response()
    }
}

/// Success envelope returned by every operation: `{success, data?, message?}`.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T = ()> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ActionResponse<()> {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(msg.into()),
        }
    }
}

pub type ApiResult<T> = Result<Json<ActionResponse<T>>, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_envelope_skips_message() {
        let body = serde_json::to_string(&ActionResponse::data(vec![1, 2, 3])).unwrap();
        assert_eq!(body, r#"{"success":true,"data":[1,2,3]}"#);
    }

    #[test]
    fn message_envelope_skips_data() {
        let body = serde_json::to_string(&ActionResponse::message("Joined waitlist")).unwrap();
        assert_eq!(body, r#"{"success":true,"message":"Joined waitlist"}"#);
    }

    #[test]
    fn unique_violation_only_matches_23505() {
        assert!(!AppError::is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!AppError::is_serialization_failure(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(AppError::NotFound("Team").to_string(), "Team not found");
    }
}
